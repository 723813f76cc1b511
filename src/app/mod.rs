pub mod motor_service;
