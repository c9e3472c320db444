//! Repository round-trip tests against an in-memory SQLite database.

use chrono::{NaiveDate, TimeZone, Utc};
use nestling_db::*;

async fn test_db() -> Database {
    // One connection: an in-memory store exists per connection.
    let db = Database::open("sqlite::memory:", 1).await.expect("open db");
    db.initialize().await.expect("initialize db");
    db
}

async fn seed_child(db: &Database) -> Child {
    let users = UserRepository::new(db);
    let user = users
        .create(NewUser {
            email: "parent@example.com".to_string(),
            full_name: "Pat Example".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .expect("create user");

    ChildRepository::new(db)
        .insert(
            &user.id,
            NewChild {
                name: "Alex".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                gender: "male".to_string(),
            },
        )
        .await
        .expect("create child")
}

#[tokio::test]
async fn test_feeding_round_trip_and_delete() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = FeedingRepository::new(&db);

    let inserted = repo
        .insert(
            &child.id,
            NewFeedingLog {
                feeding_type: "solid_food".to_string(),
                amount: Some("1 cup".to_string()),
                duration_minutes: None,
                food_items: vec!["banana".to_string(), "oatmeal".to_string()],
                notes: Some("ate well".to_string()),
                fed_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap(),
            },
        )
        .await
        .unwrap();

    let logs = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, inserted.id);
    assert_eq!(logs[0].feeding_type, "solid_food");
    assert_eq!(logs[0].amount.as_deref(), Some("1 cup"));
    assert_eq!(logs[0].food_items.0, vec!["banana", "oatmeal"]);
    assert_eq!(logs[0].fed_at, inserted.fed_at);

    assert!(repo.delete(&inserted.id, &child.user_id).await.unwrap());
    assert!(repo.list_by_child(&child.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_feeding_list_is_newest_first_and_capped() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = FeedingRepository::new(&db);

    for hour in 0..25 {
        repo.insert(
            &child.id,
            NewFeedingLog {
                feeding_type: "bottle".to_string(),
                amount: Some(format!("{hour} oz")),
                duration_minutes: None,
                food_items: vec![],
                notes: None,
                fed_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::hours(hour),
            },
        )
        .await
        .unwrap();
    }

    let logs = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(logs.len(), 20);
    assert_eq!(logs[0].amount.as_deref(), Some("24 oz"));
    assert!(logs.windows(2).all(|w| w[0].fed_at >= w[1].fed_at));
}

#[tokio::test]
async fn test_sleep_round_trip_derives_duration() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = SleepRepository::new(&db);

    let start = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 6, 2, 6, 30, 0).unwrap();
    let inserted = repo
        .insert(
            &child.id,
            NewSleepLog {
                sleep_start: start,
                sleep_end: Some(end),
                sleep_quality: Some("good".to_string()),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(inserted.duration_minutes, Some(630));

    let logs = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].sleep_start, start);
    assert_eq!(logs[0].sleep_end, Some(end));
    assert_eq!(logs[0].duration_minutes, Some(630));

    assert!(repo.delete(&inserted.id, &child.user_id).await.unwrap());
    assert!(repo.list_by_child(&child.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_growth_round_trip_ordering() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = GrowthRepository::new(&db);

    for (day, weight) in [(1, 5.1), (15, 5.4), (8, 5.2)] {
        repo.insert(
            &child.id,
            NewGrowthRecord {
                measurement_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                height_cm: None,
                weight_kg: Some(weight),
                head_circumference_cm: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let records = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(records.len(), 3);
    // Most recent measurement first.
    assert_eq!(records[0].weight_kg, Some(5.4));
    assert_eq!(records[2].weight_kg, Some(5.1));
}

#[tokio::test]
async fn test_vaccines_ordered_by_scheduled_date_ascending() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = VaccineRepository::new(&db);

    for (name, month) in [("MMR", 9), ("DTaP", 2), ("Hib", 6)] {
        repo.insert(
            &child.id,
            NewVaccineRecord {
                vaccine_name: name.to_string(),
                scheduled_date: NaiveDate::from_ymd_opt(2025, month, 1),
                administered_date: None,
                next_dose_date: None,
                provider: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let records = repo.list_by_child(&child.id).await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.vaccine_name.as_str()).collect();
    assert_eq!(names, ["DTaP", "Hib", "MMR"]);

    assert!(repo.delete(&records[0].id, &child.user_id).await.unwrap());
    assert_eq!(repo.list_by_child(&child.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_photo_round_trip() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = PhotoRepository::new(&db);

    let inserted = repo
        .insert(
            &child.id,
            NewPhoto {
                photo_url: "https://example.com/first-steps.jpg".to_string(),
                caption: Some("First steps!".to_string()),
                date_taken: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            },
        )
        .await
        .unwrap();

    let photos = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].photo_url, inserted.photo_url);
    assert_eq!(photos[0].caption.as_deref(), Some("First steps!"));
    assert!(photos[0].ai_tags.0.is_empty());

    assert!(repo.delete(&inserted.id, &child.user_id).await.unwrap());
    assert!(!repo.delete(&inserted.id, &child.user_id).await.unwrap());
}

#[tokio::test]
async fn test_doctor_note_round_trip() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = DoctorNoteRepository::new(&db);

    let inserted = repo
        .insert(
            &child.id,
            NewDoctorNote {
                visit_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                provider_name: Some("Dr. Lee".to_string()),
                reason: "12-month checkup".to_string(),
                diagnosis: None,
                follow_up_date: NaiveDate::from_ymd_opt(2025, 10, 2),
                notes: Some("all on track".to_string()),
            },
        )
        .await
        .unwrap();

    let notes = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].reason, "12-month checkup");
    assert_eq!(notes[0].follow_up_date, inserted.follow_up_date);

    assert!(repo.delete(&inserted.id, &child.user_id).await.unwrap());
    assert!(repo.list_by_child(&child.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_milestone_records_insert_and_clear() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let repo = MilestoneRepository::new(&db);

    let record = repo
        .insert(
            &child.id,
            NewMilestoneRecord {
                milestone_id: "5".to_string(),
                achieved_date: NaiveDate::from_ymd_opt(2025, 5, 20),
            },
        )
        .await
        .unwrap();

    let records = repo.list_by_child(&child.id).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].milestone_id, "5");

    assert!(repo.delete(&record.id, &child.user_id).await.unwrap());
    assert!(repo.list_by_child(&child.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_messages_keep_transcript_order() {
    let db = test_db().await;
    let users = UserRepository::new(&db);
    let user = users
        .create(NewUser {
            email: "p@example.com".to_string(),
            full_name: "P".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();

    let repo = ChatRepository::new(&db);
    let conversation = repo
        .create_conversation(&user.id, "New Conversation")
        .await
        .unwrap();

    for (role, content) in [("user", "hi"), ("assistant", "hello"), ("user", "help")] {
        repo.insert_message(
            &conversation.id,
            NewChatMessage { role: role.to_string(), content: content.to_string() },
        )
        .await
        .unwrap();
    }

    let messages = repo.list_messages(&conversation.id).await.unwrap();
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["hi", "hello", "help"]);
}

#[tokio::test]
async fn test_community_seeded_once_and_accepts_new_questions() {
    let db = test_db().await;
    // A second initialize must not duplicate the seed rows.
    db.initialize().await.unwrap();

    let repo = CommunityRepository::new(&db);
    let seeded = repo.list().await.unwrap();
    assert_eq!(seeded.len(), 4);

    let question = repo
        .insert(
            "Pat Example",
            NewQuestion {
                title: "Teething remedies?".to_string(),
                content: "What helped your little ones through teething?".to_string(),
            },
        )
        .await
        .unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 5);
    // Newest first.
    assert_eq!(all[0].id, question.id);
    assert_eq!(all[0].answers, 0);
    assert_eq!(all[0].likes, 0);
}

#[tokio::test]
async fn test_sessions_resolve_and_revoke() {
    let db = test_db().await;
    let repo = UserRepository::new(&db);
    let user = repo
        .create(NewUser {
            email: "p@example.com".to_string(),
            full_name: "P".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();

    let session = repo.create_session(&user.id).await.unwrap();
    let resolved = repo.find_by_session(&session.token).await.unwrap().unwrap();
    assert_eq!(resolved.id, user.id);

    assert!(repo.delete_session(&session.token).await.unwrap());
    assert!(repo.find_by_session(&session.token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = test_db().await;
    let repo = UserRepository::new(&db);
    let new = NewUser {
        email: "p@example.com".to_string(),
        full_name: "P".to_string(),
        password_hash: "digest".to_string(),
    };
    repo.create(new.clone()).await.unwrap();

    let err = repo.create(new).await.unwrap_err();
    assert!(matches!(err, DbError::Duplicate(_)));
}

#[tokio::test]
async fn test_children_scoped_by_user() {
    let db = test_db().await;
    let users = UserRepository::new(&db);
    let a = users
        .create(NewUser {
            email: "a@example.com".to_string(),
            full_name: "A".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();
    let b = users
        .create(NewUser {
            email: "b@example.com".to_string(),
            full_name: "B".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();

    let children = ChildRepository::new(&db);
    children
        .insert(
            &a.id,
            NewChild {
                name: "Alex".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                gender: "male".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(children.list_by_user(&a.id).await.unwrap().len(), 1);
    assert!(children.list_by_user(&b.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insights_limited_to_three_most_recent() {
    let db = test_db().await;
    let users = UserRepository::new(&db);
    let user = users
        .create(NewUser {
            email: "p@example.com".to_string(),
            full_name: "P".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();

    let repo = InsightRepository::new(&db);
    for i in 0..5 {
        repo.insert(&user.id, &format!("tip {i}")).await.unwrap();
        // created_at must strictly increase for the ordering assertion.
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let recent = repo.list_recent(&user.id).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].content, "tip 4");
    assert_eq!(recent[2].content, "tip 2");
}

#[tokio::test]
async fn test_delete_refuses_another_users_records() {
    let db = test_db().await;
    let child = seed_child(&db).await;
    let stranger = UserRepository::new(&db)
        .create(NewUser {
            email: "stranger@example.com".to_string(),
            full_name: "S".to_string(),
            password_hash: "digest".to_string(),
        })
        .await
        .unwrap();

    let repo = FeedingRepository::new(&db);
    let log = repo
        .insert(
            &child.id,
            NewFeedingLog {
                feeding_type: "bottle".to_string(),
                amount: None,
                duration_minutes: None,
                food_items: vec![],
                notes: None,
                fed_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            },
        )
        .await
        .unwrap();

    // A different user's delete is a no-op; the owner's succeeds.
    assert!(!repo.delete(&log.id, &stranger.id).await.unwrap());
    assert_eq!(repo.list_by_child(&child.id).await.unwrap().len(), 1);
    assert!(repo.delete(&log.id, &child.user_id).await.unwrap());
}

#[tokio::test]
async fn test_child_delete_cascades_feature_rows() {
    let db = test_db().await;
    let child = seed_child(&db).await;

    FeedingRepository::new(&db)
        .insert(
            &child.id,
            NewFeedingLog {
                feeding_type: "bottle".to_string(),
                amount: None,
                duration_minutes: None,
                food_items: vec![],
                notes: None,
                fed_at: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            },
        )
        .await
        .unwrap();
    SleepRepository::new(&db)
        .insert(
            &child.id,
            NewSleepLog {
                sleep_start: Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap(),
                sleep_end: Some(Utc.with_ymd_and_hms(2025, 6, 2, 6, 0, 0).unwrap()),
                sleep_quality: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    MilestoneRepository::new(&db)
        .insert(
            &child.id,
            NewMilestoneRecord { milestone_id: "1".to_string(), achieved_date: None },
        )
        .await
        .unwrap();

    assert!(ChildRepository::new(&db).delete(&child.id).await.unwrap());

    for table in ["feeding_logs", "sleep_logs", "milestone_records"] {
        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE child_id = ?"))
                .bind(&child.id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(count, 0, "{table} rows should be gone");
    }
}
