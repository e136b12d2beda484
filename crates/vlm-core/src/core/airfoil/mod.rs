pub mod camber;
