pub mod history;
pub mod outreach;
