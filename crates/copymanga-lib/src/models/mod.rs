pub mod source_info;
pub use source_info::*;

pub mod chapter_list;
pub use chapter_list::*;

pub mod parsed_title;
pub use parsed_title::*;

pub mod chapter_info;
pub use chapter_info::*;

pub mod page;
pub use page::*;
