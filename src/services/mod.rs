pub mod account_service;
pub mod leaderboard_service;
pub mod session_service;

pub use account_service::AccountService;
pub use leaderboard_service::LeaderboardService;
pub use session_service::QuizSessionController;
