mod add_department;
mod add_library;
mod add_member;
mod delete_library;
mod delete_member;

pub use add_department::AddDepartmentDialog;
pub use add_library::AddLibraryDialog;
pub use add_member::AddMemberDialog;
pub use delete_library::DeleteLibraryDialog;
pub use delete_member::DeleteMemberDialog;
