pub mod aggregate;

pub use aggregate::{
    AddDepartmentRequest, AddMemberRequest, AncestorGroup, Department, DepartmentId,
    DepartmentInfo,
};
