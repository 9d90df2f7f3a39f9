//! Seed collections for the session-local stores.
//!
//! These stand in for a real data store. Every sample store starts from a
//! fresh copy, so edits and deletes never outlive the page session.

use super::{EntityKind, Record};

/// Fresh copy of the sample collection for `kind`.
pub fn sample_records(kind: EntityKind) -> Vec<Record> {
    match kind {
        EntityKind::User => users(),
        EntityKind::Candidate => candidates(),
        EntityKind::InterviewScheduling => interview_schedulings(),
        EntityKind::TestScheduling => test_schedulings(),
        EntityKind::Interview => interviews(),
        EntityKind::PsychologicalTest => psychological_tests(),
    }
}

fn users() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "roy@gmail.com"),
        (2, "Ebde Muttakin", "dul@gmail.com"),
        (3, "Komeng Adul", "meng@gmail.com"),
        (4, "Angga Yanto", "gaa@gmail.com"),
        (5, "Dani Batubara", "dan@gmail.com"),
        (6, "Isman Ahmad", "man@gmail.com"),
        (7, "Alam Ilham", "lam@gmail.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| {
        Record::new(id, [("name", name), ("email", email), ("role", "Interviewee"), ("status", "On Progress")])
    })
    .collect()
}

fn candidates() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "BackEnd", "08917652341", "roy@gmail.com"),
        (2, "Ebde Muttakin", "BackEnd", "08889975432", "dul@gmail.com"),
        (3, "Komeng Adul", "FrontEnd", "08112467890", "meng@gmail.com"),
        (4, "Angga Yanto", "FrontEnd", "08881114562", "gaa@gmail.com"),
        (5, "Dani Batubara", "Full Stack", "0881023100307", "dan@gmail.com"),
        (6, "Isman Ahmad", "FrontEnd", "088811145663", "man@gmail.com"),
        (7, "Alam Ilham", "BackEnd", "08889975532", "lam@gmail.com"),
    ]
    .into_iter()
    .map(|(id, name, position, phone, email)| {
        Record::new(id, [("name", name), ("position", position), ("phoneNumber", phone), ("email", email)])
    })
    .collect()
}

fn interview_schedulings() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "John Doe", "2024-11-20T10:00"),
        (2, "Ebde Muttakin", "Jane Smith", "2024-11-21T14:00"),
        (3, "Komeng Adul", "John Doe", "2024-11-22T10:00"),
        (4, "Angga Yanto", "Jane Smith", "2024-11-23T14:00"),
        (5, "Dani Batubara", "John Doe", "2024-11-24T10:00"),
        (6, "Isman Ahmad", "Jane Smith", "2024-11-25T14:00"),
        (7, "Alam Ilham", "John Doe", "2024-11-26T10:00"),
    ]
    .into_iter()
    .map(|(id, candidate, interviewer, date)| {
        Record::new(
            id,
            [("candidate", candidate), ("interviewer", interviewer), ("date", date), ("status", "Scheduled")],
        )
    })
    .collect()
}

fn test_schedulings() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "roy@example.com", "2024-11-25", "09:00", "Dr. Ana"),
        (2, "Ebde Muttakin", "ebde@example.com", "2024-11-26", "14:00", "Dr. Budi"),
        (3, "Komeng Adul", "komeng@example.com", "2024-11-27", "10:00", "Dr. Citra"),
        (4, "Angga Yanto", "angga@example.com", "2024-11-28", "13:00", "Dr. Dodi"),
    ]
    .into_iter()
    .map(|(id, name, email, date, time, examiner)| {
        Record::new(
            id,
            [("name", name), ("email", email), ("testDate", date), ("testTime", time), ("examiner", examiner)],
        )
    })
    .collect()
}

fn interviews() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "08917652341", "roy@gmail.com", "2024-12-01", "Backend"),
        (2, "Ebde Muttakin", "08889975432", "dul@gmail.com", "2024-12-02", "Frontend"),
        (3, "Komeng Adul", "08112467890", "meng@gmail.com", "2024-12-03", "Marketing Manager"),
        (4, "Angga Yanto", "08881114562", "gaa@gmail.com", "2024-12-04", "Full Stack"),
        (5, "Dani Batubara", "0881023100307", "dan@gmail.com", "2024-12-05", "UI/UX Designer"),
    ]
    .into_iter()
    .map(|(id, name, contact, email, date, position)| {
        Record::new(
            id,
            [("name", name), ("contact", contact), ("email", email), ("date", date), ("position", position)],
        )
    })
    .collect()
}

fn psychological_tests() -> Vec<Record> {
    [
        (1, "Roy Rohmat", "roy@gmail.com", "2024-12-01", "Passed"),
        (2, "Ebde Muttakin", "dul@gmail.com", "2024-12-02", "In Progress"),
        (3, "Komeng Adul", "meng@gmail.com", "2024-12-03", "Failed"),
        (4, "Angga Yanto", "gaa@gmail.com", "2024-12-04", "In Progress"),
        (5, "Dani Batubara", "dan@gmail.com", "2024-12-05", "Passed"),
    ]
    .into_iter()
    .map(|(id, name, email, date, result)| {
        Record::new(id, [("name", name), ("email", email), ("date", date), ("result", result)])
    })
    .collect()
}
