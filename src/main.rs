use std::io::{self, Write};

use cyberquiz::app_state::AppState;
use cyberquiz::config::Config;
use cyberquiz::errors::QuizError;
use cyberquiz::models::dto::request::QuestionFilters;

/// Thin terminal driver for the quiz engine. All decisions (correctness,
/// points, ranks) come from the backend; this loop only renders controller
/// state and forwards user intent.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = AppState::new(config)?;

    if !state.client.has_token().await {
        match (&state.config.api_username, &state.config.api_password) {
            (Some(username), Some(password)) => {
                use secrecy::ExposeSecret;
                state
                    .account_service
                    .login(username, password.expose_secret())
                    .await?;
            }
            _ => {
                eprintln!(
                    "No credentials configured; set QUIZ_API_TOKEN or \
                     QUIZ_API_USERNAME/QUIZ_API_PASSWORD"
                );
                return Ok(());
            }
        }
    }

    let profile = state.account_service.profile().await?;
    println!(
        "Welcome back, {} ({} points, rank {})",
        profile.username,
        profile.total_points,
        profile
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unranked".to_string())
    );

    if let Ok(categories) = state.session_controller.categories().await {
        println!("Categories: {}", categories.join(", "));
    }

    let controller = &state.session_controller;
    let mut session = match controller
        .start(state.config.question_count, QuestionFilters::default())
        .await
    {
        Ok(session) => session,
        Err(QuizError::EmptyResult(_)) => {
            println!("No questions available right now, try again later.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    loop {
        let question = controller.current_question(&mut session)?.clone();
        println!(
            "\nQuestion {} of {} [{} / {} / {} pts]\n{}",
            session.cursor() + 1,
            session.len(),
            question.category,
            question.difficulty,
            question.points_value,
            question.question_text
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        let result = loop {
            let input = read_line("Your answer: ")?;
            let selected = match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= question.options.len() => {
                    question.options[n - 1].clone()
                }
                _ => input.clone(),
            };

            match controller.submit(&mut session, &selected).await {
                Ok(result) => break result,
                Err(QuizError::InvalidInput(msg)) => println!("{}", msg),
                Err(err) if err.is_retryable() => {
                    println!("Submission failed ({}), retrying is safe.", err)
                }
                Err(err) => return Err(err.into()),
            }
        };

        if result.is_correct {
            println!("Correct! +{} points", result.points_earned);
        } else {
            println!("Incorrect. The answer was: {}", result.correct_answer);
        }
        println!("{}", result.explanation);
        println!(
            "Running total: {} points, {} correct so far",
            session.total_points(),
            session.correct_count()
        );

        if !controller.advance(&mut session)? {
            break;
        }
        read_line("Press Enter for the next question...")?;
    }

    println!(
        "\nSession complete: {}/{} correct, {} total points",
        session.correct_count(),
        session.len(),
        session.total_points()
    );

    match state
        .leaderboard_service
        .top(state.config.leaderboard_limit)
        .await
    {
        Ok(entries) => {
            println!("\nLeaderboard:");
            for entry in entries {
                println!(
                    "  #{:<3} {:<20} {:>6} pts  {:>5.1}% accuracy",
                    entry.rank, entry.username, entry.total_points, entry.accuracy
                );
            }
        }
        Err(err) => log::warn!("leaderboard refresh failed: {}", err),
    }
    if let Ok(me) = state.leaderboard_service.my_rank().await {
        println!("Your rank: #{} with {} points", me.rank, me.total_points);
    }

    Ok(())
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
