pub mod indicator_service;
