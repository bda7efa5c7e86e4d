pub mod items;
pub mod notices;
pub mod report;
pub mod signup;
