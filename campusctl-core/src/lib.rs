pub mod catalog;
pub mod error;
pub mod forms;
pub mod item;
pub mod notice;
pub mod query;
pub mod style;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use forms::{ItemReport, SignupForm};
pub use item::{Item, ItemKind};
pub use notice::{Notice, NoticeCategory};
pub use query::{filter, sort_notices, CategoryFilter, Queryable};
