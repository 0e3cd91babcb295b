// tests/postgres_store_tests.rs
//
// Needs a running Postgres: DATABASE_URL=... cargo test -- --ignored

use interview_feedback::store::{FeedbackStore, PgFeedbackStore, load_feedback};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

async fn connect() -> PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

fn unique_interview_id() -> String {
    format!("mock_{}", uuid::Uuid::new_v4())
}

async fn insert_answer(pool: &PgPool, mock_idref: &str, question: &str, rating: Option<i32>) {
    sqlx::query(
        r#"
        INSERT INTO user_answers (mock_idref, question, correct_answer, user_answer, feedback, rating, user_email)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(mock_idref)
    .bind(question)
    .bind("Expected answer")
    .bind("Given answer")
    .bind("Be more specific.")
    .bind(rating)
    .bind("candidate@example.com")
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_mcq_set(pool: &PgPool, mock_idref: &str, mcqs: &str) {
    sqlx::query("INSERT INTO mcq_details (mock_idref, mcqs) VALUES ($1, $2)")
        .bind(mock_idref)
        .bind(mcqs)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn queries_filter_by_interview_and_order_by_id() {
    // Arrange
    let pool = connect().await;
    let interview = unique_interview_id();
    let other = unique_interview_id();

    insert_answer(&pool, &interview, "First", Some(3)).await;
    insert_answer(&pool, &other, "Someone else's", Some(9)).await;
    insert_answer(&pool, &interview, "Second", None).await;
    insert_answer(&pool, &interview, "Third", Some(8)).await;

    insert_mcq_set(
        &pool,
        &interview,
        r#"[{"question": "Q1", "options": [{"option": "A"}, {"option": "B"}], "correctAnswer": "A"}]"#,
    )
    .await;
    insert_mcq_set(
        &pool,
        &interview,
        r#"{"mcqs": [{"question": "Q2", "options": ["C", "D"], "correctAnswer": "D"}]}"#,
    )
    .await;

    let store = PgFeedbackStore::new(pool);

    // Act
    let answers = store.answer_rows(&interview).await.unwrap();
    let mcq_sets = store.mcq_set_rows(&interview).await.unwrap();

    // Assert: raw rows decode, stay scoped and come back in id order
    let questions: Vec<&str> = answers.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(questions, vec!["First", "Second", "Third"]);
    assert!(answers.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(answers[0].rating, Some(3));
    assert_eq!(answers[1].rating, None);
    assert_eq!(answers[0].user_email.as_deref(), Some("candidate@example.com"));
    assert!(answers[0].created_at.is_some());

    assert_eq!(mcq_sets.len(), 2);
    assert!(mcq_sets[0].id < mcq_sets[1].id);
    assert!(mcq_sets.iter().all(|r| r.mock_idref == interview));

    // The loader drops the unrated row and flattens both MCQ sets in order
    let data = load_feedback(&store, &interview).await;
    let ids: Vec<i32> = data.answers.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![answers[0].id, answers[2].id]);
    let mcq_questions: Vec<&str> = data.mcqs.iter().map(|m| m.question.as_str()).collect();
    assert_eq!(mcq_questions, vec!["Q1", "Q2"]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn unknown_interview_has_no_rows() {
    let pool = connect().await;
    let store = PgFeedbackStore::new(pool);
    let interview = unique_interview_id();

    assert!(store.answer_rows(&interview).await.unwrap().is_empty());
    assert!(store.mcq_set_rows(&interview).await.unwrap().is_empty());
}
