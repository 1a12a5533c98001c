// ABOUTME: Demo driver that seeds the in-memory store and walks the screens
// ABOUTME: Prints what a client or trainer would see for a seeded session
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

//! Demo driver for the HARDCASE core crate.
//!
//! Seeds the in-memory store with a small coaching roster and walks the
//! screen state machines for one session, printing what each screen
//! would render.
//!
//! Usage:
//! ```bash
//! # Walk the client dashboard for the seeded client user
//! cargo run --bin hardcase-demo
//!
//! # Walk the trainer surfaces
//! cargo run --bin hardcase-demo -- --role trainer
//!
//! # Deterministic schedule jitter
//! cargo run --bin hardcase-demo -- --seed 7 -v
//!
//! # Cap the dashboard's upcoming list at one workout
//! HARDCASE_UPCOMING_LIMIT=1 cargo run --bin hardcase-demo
//! ```

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use hardcase_core::auth::{resolve_gate, Role, Session, StaticSessionProvider};
use hardcase_core::config::AppConfig;
use hardcase_core::logging::LoggingConfig;
use hardcase_core::models::{
    AssignedProgram, AssignmentStatus, ClientProfile, PlannedExercise, SetPrescription,
    SubscriptionStatus, Workout,
};
use hardcase_core::navigation::Route;
use hardcase_core::screens::{
    ClientDashboardScreen, ClientProfileScreen, DashboardView, ProfileView, TrainerDashboardScreen,
    TrainerPane, TrainerView,
};
use hardcase_core::store::{MemorySeed, QueryGateway, StoreBackend};

#[derive(Parser)]
#[command(
    name = "hardcase-demo",
    about = "HARDCASE screen walkthrough over seeded demo data",
    long_about = "Seed the in-memory store with a demo roster and print what the \
                  client or trainer screens would render for one session"
)]
struct DemoArgs {
    /// Session role to walk (client or trainer)
    #[arg(long, default_value = "client")]
    role: Role,

    /// User id carried by the demo session
    #[arg(long, default_value = "user-demo-client")]
    user_id: String,

    /// Random seed for schedule jitter
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    // Demo data lives in memory regardless of the configured backend, but
    // screen knobs like HARDCASE_UPCOMING_LIMIT are honored
    let config = AppConfig::from_env()?;
    let gateway = QueryGateway::new(StoreBackend::from(seed_demo_store(args.seed)));
    let provider = StaticSessionProvider::signed_in(Session::new(&args.user_id, args.role));

    let gate = resolve_gate(&provider, args.role).await;
    println!("session user {} as {} -> gate {:?}", args.user_id, args.role, gate);
    if !gate.is_allowed() {
        println!("gate redirected; nothing to render");
        return Ok(());
    }

    match args.role {
        Role::Client => {
            walk_client_dashboard(&gateway, &args.user_id, config.upcoming_limit).await;
        }
        Role::Trainer => walk_trainer_surfaces(&gateway).await,
    }

    Ok(())
}

async fn walk_client_dashboard(gateway: &QueryGateway, user_id: &str, upcoming_limit: u32) {
    let session = Session::new(user_id, Role::Client);
    let mut screen = ClientDashboardScreen::mount_with_limit(upcoming_limit);
    screen.load(gateway, &session).await;

    println!("\n=== Client dashboard ===");
    match screen.view(Utc::now()) {
        DashboardView::Loading => println!("still loading"),
        DashboardView::Ready {
            next_workout,
            monthly_count,
            programs,
        } => {
            match next_workout {
                Some(workout) => println!(
                    "next workout: {} at {}",
                    workout.title,
                    workout.start_time.to_rfc3339()
                ),
                None => println!("no upcoming workout; offer to book a session"),
            }
            match monthly_count {
                Some(count) => println!("workouts this month: {count}"),
                None => println!("workouts this month: unavailable"),
            }
            println!("assigned programs: {}", programs.programs.len());
            for program in &programs.programs {
                println!(
                    "  {} [{}] with {} exercises",
                    program.title,
                    program.status,
                    program.exercises.len()
                );
            }
        }
    }
    for notice in screen.take_notices() {
        println!("notice ({:?}): {}", notice.level, notice.message);
    }
}

async fn walk_trainer_surfaces(gateway: &QueryGateway) {
    let mut dashboard = TrainerDashboardScreen::mount(TrainerPane::Clients);
    dashboard.load(gateway).await;

    println!("\n=== Trainer dashboard (clients) ===");
    let first_client = match dashboard.view() {
        TrainerView::CalendarPlaceholder => {
            println!("calendar placeholder");
            None
        }
        TrainerView::RosterLoading => {
            println!("roster still loading");
            None
        }
        TrainerView::Roster(roster) => {
            for client in roster {
                println!(
                    "  {} <{}> [{}]",
                    client.full_name(),
                    client.email,
                    client.subscription
                );
            }
            roster.first().map(|client| client.id.clone())
        }
    };
    for notice in dashboard.take_notices() {
        println!("notice ({:?}): {}", notice.level, notice.message);
    }

    let Some(client_id) = first_client else {
        println!("no clients on the roster; skipping profile walk");
        return;
    };
    let effect = dashboard.select_client(client_id.clone());
    println!("selecting first client -> {effect:?}");
    println!("profile route: {}", Route::TrainerClientProfile(client_id.clone()).path());

    let mut profile = ClientProfileScreen::mount(client_id);
    profile.load(gateway).await;

    println!("\n=== Client profile ===");
    match profile.view() {
        ProfileView::Loading => println!("still loading"),
        ProfileView::NotFound => println!("client not found"),
        ProfileView::Builder(state) => println!("program builder open: {state:?}"),
        ProfileView::Ready { client, tab, .. } => {
            println!("{} ({}), tab {}", client.full_name(), client.initials(), tab.title());
            for program in &profile.tree().programs {
                println!("  {} [{}]", program.title, program.status);
                for exercise in &program.exercises {
                    println!(
                        "    #{} {} x{} sets",
                        exercise.order,
                        exercise.name,
                        exercise.sets.len()
                    );
                }
            }
            if profile.tree().dropped_exercises > 0 {
                println!(
                    "  ({} exercise entries dropped during assembly)",
                    profile.tree().dropped_exercises
                );
            }
        }
    }
    for notice in profile.take_notices() {
        println!("notice ({:?}): {}", notice.level, notice.message);
    }
}

/// Seed two coached clients with programs and a jittered workout schedule.
fn seed_demo_store(seed: u64) -> hardcase_core::store::MemoryExecutor {
    let mut rng = StdRng::seed_from_u64(seed);
    let now = Utc::now();

    let maria = demo_client("Maria", "Petrova", "maria@example.com", SubscriptionStatus::Active);
    let maria_id = maria.id.clone();
    let ivan = demo_client("Ivan", "Orlov", "ivan@example.com", SubscriptionStatus::Inactive);

    let mut seed_builder = MemorySeed::new()
        .with_client(Some("user-demo-client"), maria)
        .with_client(None, ivan)
        .with_program(&maria_id, strength_program())
        .with_exercise(hardcase_core::models::ExerciseDefinition {
            id: "ex-squat".to_owned(),
            name: "Back squat".to_owned(),
            description: "Barbell squat to depth".to_owned(),
            muscle_groups: vec!["quads".to_owned(), "glutes".to_owned()],
            equipment: vec!["barbell".to_owned()],
            difficulty: "intermediate".to_owned(),
            video_url: None,
        });

    // A handful of past sessions this month plus a couple upcoming
    for day_offset in [-9_i64, -5, -2] {
        let jitter = rng.gen_range(0..120);
        seed_builder = seed_builder.with_workout(Workout::new(
            Uuid::new_v4().to_string(),
            maria_id.clone(),
            "Strength session",
            now + Duration::days(day_offset) + Duration::minutes(jitter),
        ));
    }
    for day_offset in [1_i64, 3] {
        let jitter = rng.gen_range(0..120);
        seed_builder = seed_builder.with_workout(Workout::new(
            Uuid::new_v4().to_string(),
            maria_id.clone(),
            "Technique block",
            now + Duration::days(day_offset) + Duration::minutes(jitter),
        ));
    }

    seed_builder.build()
}

fn demo_client(
    first: &str,
    last: &str,
    email: &str,
    subscription: SubscriptionStatus,
) -> ClientProfile {
    ClientProfile {
        id: Uuid::new_v4().to_string(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        phone: None,
        subscription,
    }
}

fn strength_program() -> AssignedProgram {
    AssignedProgram {
        id: "prog-strength".to_owned(),
        title: "Strength base".to_owned(),
        description: "Eight-week squat progression".to_owned(),
        created_at: Utc::now() - Duration::days(30),
        status: AssignmentStatus::Active,
        exercises: vec![PlannedExercise {
            id: "entry-1".to_owned(),
            exercise_id: "ex-squat".to_owned(),
            name: "Back squat".to_owned(),
            description: "Barbell squat to depth".to_owned(),
            order: 1,
            notes: Some("Pause on the last rep".to_owned()),
            sets: vec![
                SetPrescription {
                    set_number: 1,
                    reps: "5".to_owned(),
                    weight: Some("60kg".to_owned()),
                },
                SetPrescription {
                    set_number: 2,
                    reps: "5".to_owned(),
                    weight: Some("70kg".to_owned()),
                },
            ],
        }],
    }
}
