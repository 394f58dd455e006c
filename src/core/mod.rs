// export all modules
pub mod counter;
pub mod draft;
pub mod messages;
pub mod store;
pub mod timing;
pub mod validate;
