pub mod a001_department;
pub mod a002_member;
pub mod a003_library;
