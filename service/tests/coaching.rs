//! Coaching CRUD flow tests against the in-memory database.

use std::{thread, time::Duration};

use common::{Grams, Kilocalories, Kilograms};
use secrecy::{SecretBox, SecretString};
use service::{
    command::{self, Command as _},
    domain::{check_in, client, workout_template, Client},
    infra::InMemory,
    query, Config, Service, SessionTokens,
};

fn service() -> Service<InMemory> {
    Service::new(
        Config {
            session_tokens: SessionTokens::new(SecretString::from(
                "integration-secret",
            )),
        },
        InMemory::new(),
    )
}

async fn register(svc: &Service<InMemory>) -> Client {
    svc.execute(command::RegisterClient {
        name: client::Name::new("Jane Doe").unwrap(),
        email: client::Email::new("jane@coaching.test").unwrap(),
        password: SecretBox::new(Box::new(
            client::Password::new("correct horse").unwrap(),
        )),
        goal: client::Goal::Maintain,
    })
    .await
    .unwrap()
}

fn exercise(name: &str) -> workout_template::Exercise {
    workout_template::Exercise {
        name: workout_template::ExerciseName::new(name).unwrap(),
        sets: 5,
        reps: 5,
        rest_seconds: 180,
        notes: None,
    }
}

#[tokio::test]
async fn workout_template_crud_roundtrips() {
    let svc = service();
    let client = register(&svc).await;

    let created = svc
        .execute(command::CreateWorkoutTemplate {
            client_id: client.id,
            title: workout_template::Title::new("Lower A").unwrap(),
            exercises: vec![exercise("Back Squat"), exercise("Leg Press")],
        })
        .await
        .unwrap();

    let found = svc
        .execute(query::workout_template::ById::by(created.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title.to_string(), "Lower A");
    assert_eq!(found.exercises.len(), 2);

    let updated = svc
        .execute(command::UpdateWorkoutTemplate {
            id: created.id,
            title: Some(workout_template::Title::new("Lower B").unwrap()),
            exercises: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.title.to_string(), "Lower B");
    assert_eq!(updated.exercises.len(), 2);
    assert!(updated.updated_at >= created.updated_at);

    svc.execute(command::DeleteWorkoutTemplate { id: created.id })
        .await
        .unwrap();

    assert!(svc
        .execute(query::workout_template::ById::by(created.id))
        .await
        .unwrap()
        .is_none());

    let err = svc
        .execute(command::DeleteWorkoutTemplate { id: created.id })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::delete_workout_template::ExecutionError::TemplateNotExists(_),
    ));
}

#[tokio::test]
async fn workout_templates_are_listed_in_creation_order() {
    let svc = service();
    let client = register(&svc).await;

    for title in ["Lower A", "Upper A", "Lower B"] {
        drop(
            svc.execute(command::CreateWorkoutTemplate {
                client_id: client.id,
                title: workout_template::Title::new(title).unwrap(),
                exercises: vec![exercise("Back Squat")],
            })
            .await
            .unwrap(),
        );
        // Creation timestamps must differ for the order to be observable.
        thread::sleep(Duration::from_millis(5));
    }

    let listed = svc
        .execute(query::workout_template::ByClient::by(client.id))
        .await
        .unwrap();
    let titles =
        listed.iter().map(|t| t.title.to_string()).collect::<Vec<_>>();
    assert_eq!(titles, ["Lower A", "Upper A", "Lower B"]);
}

#[tokio::test]
async fn workout_template_requires_existing_client_and_exercises() {
    let svc = service();
    let client = register(&svc).await;

    let err = svc
        .execute(command::CreateWorkoutTemplate {
            client_id: client::Id::new(),
            title: workout_template::Title::new("Lower A").unwrap(),
            exercises: vec![exercise("Back Squat")],
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_workout_template::ExecutionError::ClientNotExists(_),
    ));

    let err = svc
        .execute(command::CreateWorkoutTemplate {
            client_id: client.id,
            title: workout_template::Title::new("Lower A").unwrap(),
            exercises: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_workout_template::ExecutionError::NoExercises,
    ));
}

#[tokio::test]
async fn macro_target_is_upserted_per_client() {
    let svc = service();
    let client = register(&svc).await;

    let first = svc
        .execute(command::SetMacroTarget {
            client_id: client.id,
            protein: Grams::from(180),
            carbs: Grams::from(250),
            fat: Grams::from(70),
        })
        .await
        .unwrap();
    assert_eq!(first.calories(), Kilocalories::from(2350));

    let second = svc
        .execute(command::SetMacroTarget {
            client_id: client.id,
            protein: Grams::from(200),
            carbs: Grams::from(200),
            fat: Grams::from(60),
        })
        .await
        .unwrap();

    let stored = svc
        .execute(query::macro_target::ByClient::by(client.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.protein, second.protein);
    assert_eq!(stored.carbs, second.carbs);
    assert_eq!(stored.fat, second.fat);
    assert_eq!(stored.calories(), Kilocalories::from(2140));
}

#[tokio::test]
async fn check_in_is_reviewed_with_feedback() {
    let svc = service();
    let client = register(&svc).await;

    let submitted = svc
        .execute(command::CreateCheckIn {
            client_id: client.id,
            weight: Kilograms::new("82.5".parse().unwrap()).unwrap(),
            body_fat: common::Percent::new("18.2".parse().unwrap()),
            notes: check_in::Notes::new("Slept badly this week."),
        })
        .await
        .unwrap();
    assert!(submitted.feedback.is_none());
    assert!(submitted.reviewed_at.is_none());

    let reviewed = svc
        .execute(command::ReviewCheckIn {
            id: submitted.id,
            feedback: check_in::Feedback::new("Drop cardio to two sessions.")
                .unwrap(),
        })
        .await
        .unwrap();
    assert!(reviewed.feedback.is_some());
    assert!(reviewed.reviewed_at.is_some());

    let stored = svc
        .execute(query::check_in::ById::by(submitted.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.feedback.unwrap().to_string(),
        "Drop cardio to two sessions.",
    );
}

#[tokio::test]
async fn check_ins_are_listed_most_recent_first() {
    let svc = service();
    let client = register(&svc).await;

    let mut ids = vec![];
    for weight in ["83.1", "82.5", "82.2"] {
        let check_in = svc
            .execute(command::CreateCheckIn {
                client_id: client.id,
                weight: Kilograms::new(weight.parse().unwrap()).unwrap(),
                body_fat: None,
                notes: None,
            })
            .await
            .unwrap();
        ids.push(check_in.id);
        thread::sleep(Duration::from_millis(5));
    }
    ids.reverse();

    let listed = svc
        .execute(query::check_in::ByClient::by(client.id))
        .await
        .unwrap();
    assert_eq!(listed.iter().map(|c| c.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn reviewing_unknown_check_in_is_rejected() {
    let err = service()
        .execute(command::ReviewCheckIn {
            id: check_in::Id::new(),
            feedback: check_in::Feedback::new("Looks good.").unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::review_check_in::ExecutionError::CheckInNotExists(_),
    ));
}
