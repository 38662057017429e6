// Draft tracking: the ranked pool and the interactive removal loop.

pub mod pool;
pub mod tracker;
