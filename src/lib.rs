pub mod etl;
pub mod model;
pub mod server;
