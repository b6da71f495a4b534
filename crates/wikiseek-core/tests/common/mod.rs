pub mod raw_client;
