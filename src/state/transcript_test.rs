use super::*;

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert!(transcript.last().is_none());
}

#[test]
fn add_message_appends_in_order_with_unique_ids() {
    let mut transcript = Transcript::default();
    let a = transcript.add_message(Role::User, "hello");
    let b = transcript.add_message(Role::Bot, "hi there");
    assert_ne!(a, b);
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.messages()[0].role, Role::User);
    assert_eq!(transcript.last().unwrap().text, "hi there");
}

#[test]
fn rewrite_changes_text_in_place() {
    let mut transcript = Transcript::default();
    let id = transcript.add_message(Role::Bot, "Generating...");
    assert!(transcript.rewrite(&id, "Done"));
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.get(&id).unwrap().text, "Done");
}

#[test]
fn rewrite_after_clear_reports_missing() {
    let mut transcript = Transcript::default();
    let id = transcript.add_message(Role::Bot, "Generating...");
    transcript.clear();
    assert!(!transcript.rewrite(&id, "Done"));
    assert!(!transcript.attach_image(&id, "http://x/img.png"));
    assert!(transcript.is_empty());
}

#[test]
fn attach_image_is_listed_in_images() {
    let mut transcript = Transcript::default();
    transcript.add_message(Role::User, "pink box");
    let id = transcript.add_message(Role::Bot, "Ready");
    assert!(transcript.attach_image(&id, "http://x/img.png"));
    assert_eq!(transcript.images().collect::<Vec<_>>(), vec!["http://x/img.png"]);
}

#[test]
fn role_css_classes() {
    assert_eq!(Role::User.css_class(), "msg user");
    assert_eq!(Role::Bot.css_class(), "msg bot");
}
