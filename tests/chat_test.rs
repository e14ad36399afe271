use guidance_engine::models::message::Sender;
use guidance_engine::services::chat_service::{
    scripted_reply, ChatService, VOICE_CAPTURE_SENTENCE,
};
use std::time::Duration;

fn service() -> ChatService {
    ChatService::new(
        Duration::from_millis(1500),
        Duration::from_millis(2000),
        "en".to_string(),
    )
}

#[test]
fn reply_dispatch_is_keyword_based_and_total() {
    assert!(scripted_reply("Best engineering colleges?").contains("IIT Delhi"));
    assert!(scripted_reply("Medical college fees?").contains("AIIMS Delhi"));
    assert!(scripted_reply("Scholarship deadlines?").contains("Merit Scholarships"));
    assert!(scripted_reply("xyz random text").contains("I understand you need guidance"));
}

#[test]
fn reply_dispatch_is_case_insensitive_and_first_match_wins() {
    assert!(scripted_reply("ENGINEERING?").contains("IIT Delhi"));
    // "engineering" is tested before "medical" and "scholarship".
    assert!(scripted_reply("medical engineering scholarships").contains("IIT Delhi"));
}

#[tokio::test(start_paused = true)]
async fn engineering_question_gets_engineering_reply() {
    let chat = service();
    let handle = chat.submit("Best engineering colleges?").expect("scheduled");

    // greeting + user message; the reply has not landed yet
    assert_eq!(chat.transcript_len(), 2);

    let reply = handle.await.expect("reply task");
    assert_eq!(reply.sender, Sender::Assistant);
    assert!(reply.content.contains("IIT Delhi"));
    assert_eq!(chat.transcript_len(), 3);
}

#[tokio::test(start_paused = true)]
async fn unmatched_question_gets_generic_reply() {
    let chat = service();
    let handle = chat.submit("xyz random text").expect("scheduled");
    let reply = handle.await.expect("reply task");
    assert!(reply.content.contains("I understand you need guidance"));
}

#[tokio::test(start_paused = true)]
async fn reply_lands_only_after_the_delay() {
    let chat = service();
    let _handle = chat.submit("hello").expect("scheduled");
    // let the reply task start its timer before moving the clock
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(1400)).await;
    tokio::task::yield_now().await;
    assert_eq!(chat.transcript_len(), 2);

    tokio::time::advance(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    assert_eq!(chat.transcript_len(), 3);
}

#[tokio::test(start_paused = true)]
async fn empty_submission_is_silently_ignored() {
    let chat = service();
    assert!(chat.submit("").is_none());
    assert!(chat.submit("   \t  ").is_none());
    assert_eq!(chat.transcript_len(), 1);
}

#[tokio::test(start_paused = true)]
async fn overlapping_submissions_each_get_their_own_reply() {
    let chat = service();
    let first = chat.submit("engineering").expect("scheduled");
    let second = chat.submit("medical").expect("scheduled");

    let first_reply = first.await.expect("first reply");
    let second_reply = second.await.expect("second reply");
    assert!(first_reply.content.contains("IIT Delhi"));
    assert!(second_reply.content.contains("AIIMS Delhi"));

    // greeting + two user turns + two replies
    assert_eq!(chat.transcript_len(), 5);
}

#[tokio::test(start_paused = true)]
async fn transcript_is_append_only_with_increasing_ids() {
    let chat = service();
    let handle = chat.submit("scholarship").expect("scheduled");
    handle.await.expect("reply task");

    let transcript = chat.transcript();
    assert_eq!(transcript[0].sender, Sender::Assistant);
    assert_eq!(transcript[0].language.as_deref(), Some("hi"));
    assert!(transcript
        .windows(2)
        .all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test(start_paused = true)]
async fn submit_clears_the_input_buffer() {
    let chat = service();
    chat.set_input("Best engineering colleges?");
    let handle = chat.submit("Best engineering colleges?").expect("scheduled");
    assert_eq!(chat.input_buffer(), "");
    handle.await.expect("reply task");
}

#[tokio::test(start_paused = true)]
async fn voice_capture_fills_the_input_buffer() {
    let chat = service();
    let handle = chat.toggle_voice_capture().expect("capture scheduled");
    assert!(chat.is_listening());

    handle.await.expect("capture task");
    assert!(!chat.is_listening());
    assert_eq!(chat.input_buffer(), VOICE_CAPTURE_SENTENCE);
}

#[tokio::test(start_paused = true)]
async fn toggling_off_does_not_cancel_a_scheduled_capture() {
    let chat = service();
    let handle = chat.toggle_voice_capture().expect("capture scheduled");
    assert!(chat.toggle_voice_capture().is_none());
    assert!(!chat.is_listening());

    // The earlier capture still fires and fills the buffer.
    handle.await.expect("capture task");
    assert_eq!(chat.input_buffer(), VOICE_CAPTURE_SENTENCE);
}

#[tokio::test(start_paused = true)]
async fn language_selection_does_not_vary_replies() {
    let chat = service();
    chat.set_language("hi");
    assert_eq!(chat.language(), "hi");

    let handle = chat.submit("engineering").expect("scheduled");
    let reply = handle.await.expect("reply task");
    assert!(reply.content.contains("IIT Delhi"));
    assert_eq!(reply.language, None);
}
