pub mod recommend_service;
