use crate::models::language::{Language, QuickQuestion};

/// Assistant message that opens every transcript.
pub fn greeting() -> String {
    "नमस्ते! मैं आपका AI शिक्षा सलाहकार हूं। मैं 15+ भाषाओं में सरकारी कॉलेजों के बारे में जानकारी दे सकता हूं। आप कैसे मदद चाहते हैं?".to_string()
}

pub fn languages() -> Vec<Language> {
    [
        ("en", "English", "🇺🇸"),
        ("hi", "हिंदी", "🇮🇳"),
        ("bn", "বাংলা", "🇧🇩"),
        ("te", "తెలుగు", "🇮🇳"),
        ("ta", "தமிழ்", "🇮🇳"),
        ("gu", "ગુજરાતી", "🇮🇳"),
    ]
    .iter()
    .map(|(code, name, flag)| Language {
        code: code.to_string(),
        name: name.to_string(),
        flag: flag.to_string(),
    })
    .collect()
}

pub fn quick_questions() -> Vec<QuickQuestion> {
    [
        ("Best engineering colleges?", "🏗️"),
        ("Medical college fees?", "⚕️"),
        ("Scholarship deadlines?", "💰"),
        ("JEE preparation tips?", "📚"),
        ("IAS exam pattern?", "🏛️"),
        ("College hostel info?", "🏠"),
    ]
    .iter()
    .map(|(text, icon)| QuickQuestion {
        text: text.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
