use crate::models::career_path::CareerPath;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn career_paths() -> Vec<CareerPath> {
    vec![
        CareerPath {
            id: "1".to_string(),
            title: "Computer Science Engineering".to_string(),
            field: "Technology".to_string(),
            match_score: 95,
            colleges: 150,
            scholarships: "₹50,000-₹2L".to_string(),
            duration: "4 years".to_string(),
            description: "Build software, websites, and apps. High demand in IT industry with excellent government job opportunities.".to_string(),
            skills: strings(&[
                "Programming",
                "Problem Solving",
                "Mathematics",
                "Logical Thinking",
            ]),
            top_colleges: strings(&["IIT Delhi", "NIT Trichy", "IIIT Hyderabad"]),
            average_fees: "₹40,000/year".to_string(),
            job_prospects: "Software Engineer, Data Scientist, Government IT Officer".to_string(),
        },
        CareerPath {
            id: "2".to_string(),
            title: "Civil Services (IAS/IPS)".to_string(),
            field: "Administration".to_string(),
            match_score: 88,
            colleges: 25,
            scholarships: "₹25,000-₹1L".to_string(),
            duration: "3-4 years prep".to_string(),
            description: "Serve the nation as an administrator. Make policies and lead government departments.".to_string(),
            skills: strings(&[
                "General Knowledge",
                "Essay Writing",
                "Current Affairs",
                "Leadership",
            ]),
            top_colleges: strings(&["JNU", "DU", "Jamia Millia"]),
            average_fees: "₹15,000/year".to_string(),
            job_prospects: "IAS Officer, IPS Officer, State Administrative Service".to_string(),
        },
        CareerPath {
            id: "3".to_string(),
            title: "Medicine (MBBS)".to_string(),
            field: "Healthcare".to_string(),
            match_score: 82,
            colleges: 200,
            scholarships: "₹1L-₹3L".to_string(),
            duration: "5.5 years".to_string(),
            description: "Save lives and serve society. Government medical colleges offer quality education at low cost.".to_string(),
            skills: strings(&["Biology", "Chemistry", "Empathy", "Problem Solving"]),
            top_colleges: strings(&["AIIMS Delhi", "JIPMER", "KGMC Lucknow"]),
            average_fees: "₹25,000/year".to_string(),
            job_prospects: "Doctor, Medical Officer, Public Health Specialist".to_string(),
        },
    ]
}
