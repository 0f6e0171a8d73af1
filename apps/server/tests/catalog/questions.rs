use crate::support::{assert_status, ids_of, to_json_body, with_test_app};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn posting_to_unknown_subject_auto_creates_it() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _, body) = app
                .request(
                    Method::POST,
                    "/api/subjects/math/questions",
                    Some(to_json_body(&json!({ "question": "2+2?", "options": ["3", "4"] }))?),
                )
                .await?;
            assert_status(status, StatusCode::OK, "create question");
            assert_eq!(body, json!({ "message": "Question added successfully" }));

            let (_, _, subjects) = app.request(Method::GET, "/api/subjects", None).await?;
            assert_eq!(
                subjects,
                json!([{
                    "id": "math",
                    "name": "Subject math",
                    "questions": [{
                        "id": 1,
                        "question": "2+2?",
                        "options": ["3", "4"],
                        "correct": 0,
                        "difficulty": "easy",
                        "explanation": ""
                    }]
                }])
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn supplied_fields_override_defaults() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.post_question(
                "geo",
                &json!({
                    "question": "Capital of Peru?",
                    "options": ["Quito", "Lima"],
                    "correct": 1,
                    "difficulty": "medium",
                    "explanation": "Lima has been the capital since 1535."
                }),
            )
            .await?;

            let questions = app.questions_of("geo").await?;
            assert_eq!(questions[0]["correct"], 1);
            assert_eq!(questions[0]["difficulty"], "medium");
            assert_eq!(
                questions[0]["explanation"],
                "Lima has been the capital since 1535."
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn ids_increase_and_deleted_gaps_are_not_reused() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for text in ["first", "second", "third"] {
                app.post_question("hist", &json!({ "question": text })).await?;
            }
            assert_eq!(ids_of(&app.questions_of("hist").await?), vec![1, 2, 3]);

            let (status, _, body) = app
                .request(Method::DELETE, "/api/subjects/hist/questions/2", None)
                .await?;
            assert_status(status, StatusCode::OK, "delete question 2");
            assert_eq!(body, json!({ "message": "Question deleted successfully" }));

            app.post_question("hist", &json!({ "question": "fourth" })).await?;

            let questions = app.questions_of("hist").await?;
            assert_eq!(ids_of(&questions), vec![1, 3, 4]);
            assert_eq!(questions[2]["question"], "fourth");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn deleting_the_highest_id_frees_it() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.post_question("hist", &json!({ "question": "a" })).await?;
            app.post_question("hist", &json!({ "question": "b" })).await?;

            let (status, _, _) = app
                .request(Method::DELETE, "/api/subjects/hist/questions/2", None)
                .await?;
            assert_status(status, StatusCode::OK, "delete max id");

            app.post_question("hist", &json!({ "question": "c" })).await?;
            assert_eq!(ids_of(&app.questions_of("hist").await?), vec![1, 2]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn invalid_question_payloads_are_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for payload in [
                json!({ "options": ["a", "b"] }),
                json!({ "question": "" }),
                json!({ "question": "q", "options": "a,b" }),
                json!({ "question": "q", "options": [1, 2] }),
                json!({ "question": "q", "options": null }),
                json!({ "question": 42 }),
            ] {
                let (status, _, body) = app
                    .request(
                        Method::POST,
                        "/api/subjects/math/questions",
                        Some(to_json_body(&payload)?),
                    )
                    .await?;
                assert_status(status, StatusCode::BAD_REQUEST, &payload.to_string());
                assert_eq!(body, json!({ "error": "Invalid question data" }));
            }

            // Rejected payloads never auto-create the subject.
            let (_, _, subjects) = app.request(Method::GET, "/api/subjects", None).await?;
            assert_eq!(subjects, json!([]));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn listing_questions_of_unknown_subject_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _, body) = app
                .request(Method::GET, "/api/subjects/nope/questions", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "list questions");
            assert_eq!(body, json!({ "error": "Subject not found" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn existing_subject_starts_with_no_questions() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _, _) = app
                .request(
                    Method::POST,
                    "/api/subjects",
                    Some(to_json_body(&json!({ "id": "bio", "name": "Biology" }))?),
                )
                .await?;
            assert_status(status, StatusCode::OK, "create subject");

            assert!(app.questions_of("bio").await?.is_empty());

            app.post_question("bio", &json!({ "question": "What is ATP?" })).await?;

            // Explicitly created subjects keep their name.
            let (_, _, subjects) = app.request(Method::GET, "/api/subjects", None).await?;
            assert_eq!(subjects[0]["name"], "Biology");
            assert_eq!(ids_of(&app.questions_of("bio").await?), vec![1]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn edit_merges_only_supplied_fields() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.post_question(
                "math",
                &json!({
                    "question": "2+2?",
                    "options": ["3", "4"],
                    "correct": 1,
                    "explanation": "Count it out."
                }),
            )
            .await?;

            let (status, _, body) = app
                .request(
                    Method::PUT,
                    "/api/subjects/math/questions/1",
                    Some(to_json_body(&json!({ "difficulty": "hard" }))?),
                )
                .await?;
            assert_status(status, StatusCode::OK, "edit question");
            assert_eq!(body, json!({ "message": "Question updated successfully" }));

            let questions = app.questions_of("math").await?;
            assert_eq!(
                questions[0],
                json!({
                    "id": 1,
                    "question": "2+2?",
                    "options": ["3", "4"],
                    "correct": 1,
                    "difficulty": "hard",
                    "explanation": "Count it out."
                })
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn edit_accepts_falsy_values_and_keeps_order() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for text in ["a", "b", "c"] {
                app.post_question(
                    "s",
                    &json!({ "question": text, "options": ["x", "y"], "correct": 1 }),
                )
                .await?;
            }

            let (status, _, _) = app
                .request(
                    Method::PUT,
                    "/api/subjects/s/questions/2",
                    Some(to_json_body(
                        &json!({ "options": [], "correct": 0, "explanation": "" }),
                    )?),
                )
                .await?;
            assert_status(status, StatusCode::OK, "edit question 2");

            let questions = app.questions_of("s").await?;
            assert_eq!(ids_of(&questions), vec![1, 2, 3]);
            assert_eq!(questions[1]["options"], json!([]));
            assert_eq!(questions[1]["correct"], 0);
            assert_eq!(questions[1]["question"], "b");
            assert_eq!(questions[0]["options"], json!(["x", "y"]));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn edit_reports_missing_subject_and_question() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let patch = to_json_body(&json!({ "difficulty": "hard" }))?;

            let (status, _, body) = app
                .request(
                    Method::PUT,
                    "/api/subjects/ghost/questions/1",
                    Some(patch.clone()),
                )
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "edit in missing subject");
            assert_eq!(body, json!({ "error": "Subject not found" }));

            app.post_question("math", &json!({ "question": "2+2?" })).await?;

            let (status, _, body) = app
                .request(Method::PUT, "/api/subjects/math/questions/9", Some(patch))
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "edit missing question");
            assert_eq!(body, json!({ "error": "Question not found" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn deleting_unknown_question_leaves_list_untouched() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for text in ["a", "b", "c"] {
                app.post_question("s", &json!({ "question": text })).await?;
            }
            let before = app.questions_of("s").await?;

            let (status, _, body) = app
                .request(Method::DELETE, "/api/subjects/s/questions/42", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "delete unknown question");
            assert_eq!(body, json!({ "error": "Question not found" }));

            assert_eq!(app.questions_of("s").await?, before);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn deleting_twice_fails_the_second_time() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.post_question("s", &json!({ "question": "only" })).await?;

            let (status, _, _) = app
                .request(Method::DELETE, "/api/subjects/s/questions/1", None)
                .await?;
            assert_status(status, StatusCode::OK, "first delete");

            let (status, _, _) = app
                .request(Method::DELETE, "/api/subjects/s/questions/1", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "second delete");

            assert!(app.questions_of("s").await?.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_in_missing_subject_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _, body) = app
                .request(Method::DELETE, "/api/subjects/ghost/questions/1", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "delete in missing subject");
            assert_eq!(body, json!({ "error": "Subject not found" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn non_numeric_question_id_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.post_question("s", &json!({ "question": "q" })).await?;

            let (status, _, body) = app
                .request(Method::DELETE, "/api/subjects/s/questions/abc", None)
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "non-numeric delete");
            assert!(body["error"]
                .as_str()
                .unwrap_or_default()
                .starts_with("Invalid path parameter"));

            let (status, _, _) = app
                .request(
                    Method::PUT,
                    "/api/subjects/s/questions/1.5",
                    Some(to_json_body(&json!({ "question": "x" }))?),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "non-numeric edit");

            assert_eq!(app.questions_of("s").await?[0]["question"], "q");
            Ok(())
        })
    })
    .await
}
