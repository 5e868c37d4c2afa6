pub mod executors;
