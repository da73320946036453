mod player_repository;

pub use player_repository::PlayerRepository;
