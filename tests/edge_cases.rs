//! Edge case tests for chatreplay
//!
//! These tests cover transcript quirks and boundary conditions that the
//! unit tests of the individual stages do not reach.

use chatreplay::attachment::{AttachmentSource, NoAttachments, Sniffed};
use chatreplay::chat::{parse_message, parse_str};
use chatreplay::{ChatError, MessageType};

/// Archive double that serves one contact card and reports every sniffed
/// file as a PDF.
struct FakeArchive;

impl AttachmentSource for FakeArchive {
    fn read_text(&self, file_name: &str) -> Option<String> {
        (file_name == "Ann.vcf").then(|| "FN:Ann Lee\nTEL;type=HOME:+234 803 555 0100\n".to_string())
    }

    fn sniff(&self, _file_name: &str) -> Option<Sniffed> {
        Some(Sniffed {
            extension: ".pdf",
            renamed_to: None,
        })
    }
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let transcript = "\
1/2/23, 10:00 - Иван: Привет мир!
1/2/23, 10:01 - 田中太郎: こんにちは世界！
1/2/23, 10:02 - User 👨‍👩‍👧: Hello 👋 World 🌍";
    let chat = parse_str(transcript, &NoAttachments).unwrap();

    assert_eq!(chat.messages()[0].sender(), Some("Иван"));
    assert_eq!(chat.messages()[1].body, "こんにちは世界！");
    assert_eq!(chat.messages()[2].sender(), Some("User 👨‍👩‍👧"));
}

#[test]
fn test_sender_with_colon_in_body() {
    let chat = parse_str("1/2/23, 10:00 - Alice: todo: buy milk: 2L", &NoAttachments).unwrap();
    assert_eq!(chat.messages()[0].sender(), Some("Alice"));
    assert_eq!(chat.messages()[0].body, "todo: buy milk: 2L");
}

#[test]
fn test_dash_separator_inside_body() {
    let chat = parse_str("1/2/23, 10:00 AM - Bob: 5 - 3 - 1 = 1", &NoAttachments).unwrap();
    assert_eq!(chat.messages()[0].time, "10:00 AM");
    assert_eq!(chat.messages()[0].body, "5 - 3 - 1 = 1");
}

// =========================================================================
// Reassembly boundaries
// =========================================================================

#[test]
fn test_blank_lines_are_continuations() {
    let chat = parse_str("1/2/23, 10:00 - Alice: one\n\nthree", &NoAttachments).unwrap();
    assert_eq!(chat.len(), 1);
    assert_eq!(chat.messages()[0].body, "one  three");
}

#[test]
fn test_date_like_continuation_is_not_a_start() {
    let transcript = "1/2/23, 10:00 - Alice: meet on\n13/2/23, not a real stamp";
    let chat = parse_str(transcript, &NoAttachments).unwrap();
    assert_eq!(chat.len(), 1);
    assert!(chat.messages()[0].body.ends_with("13/2/23, not a real stamp"));
}

#[test]
fn test_bare_date_line_is_continuation() {
    let transcript = "12/24/22, 9:00 PM - Alice: Party on\n12/25/22\nbring snacks";
    let chat = parse_str(transcript, &NoAttachments).unwrap();
    assert_eq!(chat.len(), 1);
    assert_eq!(chat.messages()[0].body, "Party on 12/25/22 bring snacks");
}

#[test]
fn test_indented_date_line_is_continuation() {
    let transcript = "12/24/22, 9:00 PM - Alice: Plans:\n 12/25/22, dinner - at mine";
    let chat = parse_str(transcript, &NoAttachments).unwrap();
    assert_eq!(chat.len(), 1);
    assert_eq!(chat.messages()[0].sender(), Some("Alice"));
    assert_eq!(chat.messages()[0].body, "Plans:  12/25/22, dinner - at mine");
}

#[test]
fn test_four_digit_year_is_not_a_start() {
    let err = parse_str("1/2/2023, 10:00 - Alice: Hi", &NoAttachments).unwrap_err();
    assert!(matches!(err, ChatError::TamperedInput { line: 1, .. }));
}

#[test]
fn test_only_blank_lines_is_tampered() {
    let err = parse_str("\n\n", &NoAttachments).unwrap_err();
    assert!(err.is_tampered());
}

// =========================================================================
// Classification boundaries
// =========================================================================

#[test]
fn test_info_with_colon_but_no_sender_separator() {
    let msg = parse_message(
        "1/2/23, 10:00 - Alice changed the group description to 10:30",
        1,
        &NoAttachments,
    )
    .unwrap();
    assert_eq!(msg.kind, MessageType::Info);
    assert_eq!(msg.sender(), None);
}

#[test]
fn test_tag_wins_over_extension() {
    let msg = parse_message(
        "1/2/23, 10:00 - Alice: IMG-0001.pdf (file attached)",
        1,
        &FakeArchive,
    )
    .unwrap();
    assert_eq!(msg.kind, MessageType::Image);
}

#[test]
fn test_contact_through_archive_double() {
    let msg = parse_message("1/2/23, 10:00 - Alice: Ann.vcf (file attached)", 1, &FakeArchive)
        .unwrap();
    assert_eq!(msg.kind, MessageType::Contact);
    assert_eq!(msg.contact(), Some(("Ann Lee", "08035550100")));
}

#[test]
fn test_sniffed_pdf_through_archive_double() {
    let msg = parse_message("1/2/23, 10:00 - Alice: scan (file attached)", 1, &FakeArchive)
        .unwrap();
    assert_eq!(msg.kind, MessageType::Pdf);
    assert_eq!(msg.attachment(), Some(("scan", "")));
}

#[test]
fn test_uppercase_pdf_extension() {
    let msg = parse_message("1/2/23, 10:00 - Bob: REPORT.PDF (file attached)", 1, &NoAttachments)
        .unwrap();
    assert_eq!(msg.kind, MessageType::Pdf);
    assert_eq!(msg.body, "REPORT.PDF|");
}

#[test]
fn test_edit_marker_in_middle_keeps_text() {
    let msg = parse_message(
        "1/2/23, 10:00 - Bob: quoting <This message was edited> here",
        1,
        &NoAttachments,
    )
    .unwrap();
    assert!(msg.edited);
    assert_eq!(msg.body, "quoting <This message was edited> here");
}

#[test]
fn test_edited_attachment_caption() {
    let msg = parse_message(
        "1/2/23, 10:00 - Bob: VID-0001.mp4 (file attached) clip <This message was edited>",
        1,
        &NoAttachments,
    )
    .unwrap();
    assert_eq!(msg.kind, MessageType::Video);
    assert!(msg.edited);
    assert_eq!(msg.body, "VID-0001.mp4|clip");
}

#[test]
fn test_marker_without_file_name_is_text() {
    let msg = parse_message("1/2/23, 10:00 - Bob: (file attached)", 1, &NoAttachments).unwrap();
    assert_eq!(msg.kind, MessageType::Text);
}

#[test]
fn test_error_position_counts_logical_messages() {
    let transcript = "1/2/23, 10:00 - A: one\ncontinued\n1/2/23, 10:01 - B: two\n1/2/23, broken";
    let err = parse_str(transcript, &NoAttachments).unwrap_err();
    assert!(matches!(err, ChatError::TamperedInput { line: 3, .. }));
}
