pub mod leaderboard;
pub mod question;
pub mod session;
pub mod user;

pub use leaderboard::LeaderboardEntry;
pub use question::{Difficulty, Question};
pub use session::{QuizSession, SessionPhase};
pub use user::{Account, UserProfile, UserStats};
