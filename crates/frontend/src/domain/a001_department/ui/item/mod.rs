mod library_row;
mod member_row;
pub mod state;
mod view;

pub use library_row::LibraryRow;
pub use member_row::MemberRow;
pub use view::DepartmentItemView;
