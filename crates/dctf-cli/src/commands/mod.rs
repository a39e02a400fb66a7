pub mod certificate;
pub mod company;
pub mod dispatch;
pub mod export;
pub mod period;
pub mod query;
pub mod results;
pub mod status;
