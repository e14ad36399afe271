use crate::models::scholarship::{ScholarshipRecord, ScholarshipStatus};
use chrono::{DateTime, TimeZone, Utc};

fn deadline(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed deadline")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The scholarship catalog. Status is set per record and deliberately not
/// cross-validated against the deadline.
pub fn scholarships() -> Vec<ScholarshipRecord> {
    vec![
        ScholarshipRecord {
            id: "1".to_string(),
            name: "Post Matric Scholarship SC/ST".to_string(),
            provider: "Ministry of Social Justice".to_string(),
            amount: "₹50,000 - ₹2,00,000".to_string(),
            deadline: deadline(2024, 3, 31),
            status: ScholarshipStatus::ClosingSoon,
            eligibility: strings(&["SC/ST Category", "Family Income < ₹2.5L", "Class 11-PG"]),
            category: "Merit + Need Based".to_string(),
            description: "Complete fee reimbursement and maintenance allowance for SC/ST students in government colleges".to_string(),
            application_progress: Some(75),
            documents_required: strings(&[
                "Caste Certificate",
                "Income Certificate",
                "Mark Sheet",
                "Bank Details",
            ]),
            beneficiaries: 50_000,
            renewable_years: Some(4),
        },
        ScholarshipRecord {
            id: "2".to_string(),
            name: "Central Sector Scholarship".to_string(),
            provider: "Ministry of Education".to_string(),
            amount: "₹12,000 - ₹20,000".to_string(),
            deadline: deadline(2024, 2, 28),
            status: ScholarshipStatus::Applied,
            eligibility: strings(&[
                "Top 20% in Class 12",
                "Family Income < ₹6L",
                "Government College",
            ]),
            category: "Merit Based".to_string(),
            description: "Merit scholarship for students who have passed Class 12 and pursuing degree in government colleges".to_string(),
            application_progress: Some(100),
            documents_required: strings(&[
                "Mark Sheet",
                "Income Certificate",
                "College Admission Proof",
            ]),
            beneficiaries: 82_000,
            renewable_years: Some(3),
        },
        ScholarshipRecord {
            id: "3".to_string(),
            name: "National Means-cum-Merit Scholarship".to_string(),
            provider: "NCERT".to_string(),
            amount: "₹12,000/year".to_string(),
            deadline: deadline(2024, 4, 15),
            status: ScholarshipStatus::Open,
            eligibility: strings(&[
                "Class 8 passed with 55%",
                "Family Income < ₹3.5L",
                "Government School",
            ]),
            category: "Merit + Need Based".to_string(),
            description: "Scholarship to prevent dropouts at Class IX and encourage students for continuing education".to_string(),
            application_progress: None,
            documents_required: strings(&[
                "Class 8 Certificate",
                "Income Certificate",
                "Caste Certificate (if applicable)",
            ]),
            beneficiaries: 100_000,
            renewable_years: None,
        },
        ScholarshipRecord {
            id: "4".to_string(),
            name: "Minority Scholarship Scheme".to_string(),
            provider: "Ministry of Minority Affairs".to_string(),
            amount: "₹30,000 - ₹1,25,000".to_string(),
            deadline: deadline(2024, 3, 15),
            status: ScholarshipStatus::Open,
            eligibility: strings(&[
                "Minority Community",
                "Family Income < ₹6L",
                "Professional Courses",
            ]),
            category: "Community Based".to_string(),
            description: "Scholarship for students from minority communities pursuing technical and professional courses".to_string(),
            application_progress: None,
            documents_required: strings(&[
                "Minority Certificate",
                "Income Certificate",
                "Admission Letter",
            ]),
            beneficiaries: 30_000,
            renewable_years: Some(5),
        },
        ScholarshipRecord {
            id: "5".to_string(),
            name: "Prime Minister's Special Scholarship".to_string(),
            provider: "AICTE".to_string(),
            amount: "₹3,000 - ₹30,000".to_string(),
            deadline: deadline(2024, 1, 31),
            status: ScholarshipStatus::Closed,
            eligibility: strings(&[
                "J&K Domicile",
                "Technical Education",
                "Government College",
            ]),
            category: "Regional".to_string(),
            description: "Special scholarship scheme for students from Jammu & Kashmir pursuing technical education".to_string(),
            application_progress: None,
            documents_required: strings(&["Domicile Certificate", "Admission Proof", "Bank Details"]),
            beneficiaries: 5_000,
            renewable_years: None,
        },
    ]
}
