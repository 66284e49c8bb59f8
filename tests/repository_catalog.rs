use sqlx::PgPool;
use std::sync::Arc;
use train_booking::domain::entities::{NewStation, NewTrain, NewTrainCarriage, TrainClass};
use train_booking::domain::repositories::{
    CarriageRepository, StationRepository, TrainRepository,
};
use train_booking::error::AppError;
use train_booking::infrastructure::persistence::{
    PgCarriageRepository, PgStationRepository, PgTrainRepository,
};

fn station(code: &str) -> NewStation {
    NewStation {
        code: code.to_string(),
        name: format!("Station {code}"),
        city: "Jakarta".to_string(),
    }
}

fn train(code: &str) -> NewTrain {
    NewTrain {
        code: code.to_string(),
        name: format!("Train {code}"),
        class: TrainClass::Economy,
    }
}

#[sqlx::test]
async fn test_station_lifecycle(pool: PgPool) {
    let repo = PgStationRepository::new(Arc::new(pool));

    let created = repo.create(station("GMR")).await.unwrap();
    assert_eq!(created.code, "GMR");

    let updated = repo
        .update(
            created.id,
            NewStation {
                name: "Gambir".to_string(),
                ..station("GMR")
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Gambir");
    assert!(updated.updated_at >= created.updated_at);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    let result = repo.delete(created.id).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_station_code_unique(pool: PgPool) {
    let repo = PgStationRepository::new(Arc::new(pool));

    repo.create(station("BD")).await.unwrap();
    let result = repo.create(station("BD")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_stations_listed_by_code(pool: PgPool) {
    let repo = PgStationRepository::new(Arc::new(pool));

    for code in ["SBY", "BD", "GMR"] {
        repo.create(station(code)).await.unwrap();
    }

    let codes: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.code)
        .collect();

    assert_eq!(codes, vec!["BD", "GMR", "SBY"]);
}

#[sqlx::test]
async fn test_train_class_roundtrip(pool: PgPool) {
    let repo = PgTrainRepository::new(Arc::new(pool));

    let created = repo
        .create(NewTrain {
            class: TrainClass::Executive,
            ..train("KA1")
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.class, TrainClass::Executive);
}

#[sqlx::test]
async fn test_carriages_count_and_filter(pool: PgPool) {
    let pool = Arc::new(pool);
    let trains = PgTrainRepository::new(pool.clone());
    let carriages = PgCarriageRepository::new(pool);

    let first = trains.create(train("T1")).await.unwrap();
    let second = trains.create(train("T2")).await.unwrap();

    for (train_id, number) in [(first.id, 2), (first.id, 1), (second.id, 1)] {
        carriages
            .create(NewTrainCarriage {
                train_id,
                carriage_number: number,
                seat_capacity: 80,
            })
            .await
            .unwrap();
    }

    assert_eq!(trains.count_carriages(first.id).await.unwrap(), 2);
    assert_eq!(carriages.list(None).await.unwrap().len(), 3);

    let numbers: Vec<i32> = carriages
        .list(Some(first.id))
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.carriage_number)
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[sqlx::test]
async fn test_carriage_number_unique_per_train(pool: PgPool) {
    let pool = Arc::new(pool);
    let trains = PgTrainRepository::new(pool.clone());
    let carriages = PgCarriageRepository::new(pool);
    let t = trains.create(train("T1")).await.unwrap();

    let carriage = NewTrainCarriage {
        train_id: t.id,
        carriage_number: 1,
        seat_capacity: 50,
    };
    carriages.create(carriage.clone()).await.unwrap();
    let result = carriages.create(carriage).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_train_with_carriages_is_restricted(pool: PgPool) {
    let pool = Arc::new(pool);
    let trains = PgTrainRepository::new(pool.clone());
    let carriages = PgCarriageRepository::new(pool);
    let t = trains.create(train("T1")).await.unwrap();

    carriages
        .create(NewTrainCarriage {
            train_id: t.id,
            carriage_number: 1,
            seat_capacity: 50,
        })
        .await
        .unwrap();

    let result = trains.delete(t.id).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}
