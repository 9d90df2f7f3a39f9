//! Static descriptors for the six entity kinds.

use super::{DataSource, EntityDescriptor, EntityKind, FieldInput, FieldSpec};

const fn field(key: &'static str, label: &'static str, input: FieldInput) -> FieldSpec {
    FieldSpec { key, label, input, required: true, initial: "" }
}

const USER_ROLES: &[&str] = &["Interviewee", "Interviewer", "HR", "Admin"];
const USER_STATUSES: &[&str] = &["On Progress", "Active", "Inactive"];
const POSITIONS: &[&str] = &["Backend", "Frontend", "Full Stack", "Marketing Manager", "UI/UX Designer"];
const SCHEDULING_STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];
const TEST_RESULTS: &[&str] = &["Passed", "In Progress", "Failed"];

static USER: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::User,
    title: "Users",
    singular: "User",
    fields: &[
        field("name", "Name", FieldInput::Text),
        field("email", "Email", FieldInput::Email),
        FieldSpec {
            required: false,
            initial: "Interviewee",
            ..field("role", "Role", FieldInput::Choice(USER_ROLES))
        },
        FieldSpec {
            required: false,
            initial: "On Progress",
            ..field("status", "Status", FieldInput::Choice(USER_STATUSES))
        },
    ],
    search_fields: ["name", "email"],
    source: DataSource::Sample,
};

static CANDIDATE: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Candidate,
    title: "Candidates",
    singular: "Candidate",
    fields: &[
        field("name", "Name", FieldInput::Text),
        field("position", "Position", FieldInput::Text),
        field("phoneNumber", "Phone Number", FieldInput::Phone),
        field("email", "Email", FieldInput::Email),
    ],
    search_fields: ["name", "position"],
    source: DataSource::Remote,
};

static INTERVIEW_SCHEDULING: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::InterviewScheduling,
    title: "Interview Scheduling",
    singular: "Interview scheduling",
    fields: &[
        field("candidate", "Candidate", FieldInput::Text),
        field("interviewer", "Interviewer", FieldInput::Text),
        field("date", "Date", FieldInput::DateTime),
        FieldSpec {
            required: false,
            initial: "Scheduled",
            ..field("status", "Status", FieldInput::Choice(SCHEDULING_STATUSES))
        },
    ],
    search_fields: ["candidate", "interviewer"],
    source: DataSource::Sample,
};

static TEST_SCHEDULING: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::TestScheduling,
    title: "Psycho Test Scheduling",
    singular: "Test scheduling",
    fields: &[
        field("name", "Name", FieldInput::Text),
        field("email", "Email", FieldInput::Email),
        field("testDate", "Test Date", FieldInput::Date),
        field("testTime", "Test Time", FieldInput::Time),
        field("examiner", "Examiner", FieldInput::Text),
    ],
    search_fields: ["name", "examiner"],
    source: DataSource::Sample,
};

static INTERVIEW: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Interview,
    title: "Interviews",
    singular: "Interview",
    fields: &[
        field("name", "Name", FieldInput::Text),
        field("contact", "Contact", FieldInput::Phone),
        field("email", "Email", FieldInput::Email),
        field("date", "Date", FieldInput::Date),
        field("position", "Position", FieldInput::Choice(POSITIONS)),
    ],
    search_fields: ["name", "position"],
    source: DataSource::Sample,
};

static PSYCHOLOGICAL_TEST: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::PsychologicalTest,
    title: "Psychological Tests",
    singular: "Psychological test",
    fields: &[
        field("name", "Name", FieldInput::Text),
        field("email", "Email", FieldInput::Email),
        field("date", "Test Date", FieldInput::Date),
        field("result", "Result", FieldInput::Choice(TEST_RESULTS)),
    ],
    search_fields: ["name", "result"],
    source: DataSource::Sample,
};

pub(super) fn descriptor(kind: EntityKind) -> &'static EntityDescriptor {
    match kind {
        EntityKind::User => &USER,
        EntityKind::Candidate => &CANDIDATE,
        EntityKind::InterviewScheduling => &INTERVIEW_SCHEDULING,
        EntityKind::TestScheduling => &TEST_SCHEDULING,
        EntityKind::Interview => &INTERVIEW,
        EntityKind::PsychologicalTest => &PSYCHOLOGICAL_TEST,
    }
}
