//! Static UI string tables for the two supported languages.
//!
//! Pure lookup, no logic: the presentation layer reads the table for the
//! session's active language. The core never mutates it.

use crate::domain::foundation::Language;

/// Named UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub symptoms_label: &'static str,
    pub symptoms_placeholder: &'static str,
    pub age_label: &'static str,
    pub age_placeholder: &'static str,
    pub submit_btn: &'static str,
    pub loading_text: &'static str,
    pub confirm_title: &'static str,
    pub confirm_desc: &'static str,
    pub back_btn: &'static str,
    pub get_results_btn: &'static str,
    pub results_title: &'static str,
    pub condition_label: &'static str,
    pub dosage_label: &'static str,
    pub not_recommended: &'static str,
    pub timing_label: &'static str,
    pub duration_label: &'static str,
    pub precautions_label: &'static str,
    pub disclaimer: &'static str,
    pub reset_btn: &'static str,
    pub privacy_note: &'static str,
    pub suggestion_error: &'static str,
    pub guidance_error: &'static str,
}

static EN: UiStrings = UiStrings {
    title: "Care Compass",
    subtitle: "Symptom Checker",
    description: "Describe how you feel in your own words and we will help you narrow it down.",
    symptoms_label: "Symptoms",
    symptoms_placeholder: "e.g. I have had a headache and mild fever since yesterday...",
    age_label: "Age (optional)",
    age_placeholder: "Enter your age",
    submit_btn: "Analyze Symptoms",
    loading_text: "Analyzing your symptoms...",
    confirm_title: "Confirm your symptoms",
    confirm_desc: "Select any of these related symptoms that also apply to you.",
    back_btn: "Back",
    get_results_btn: "Get Guidance",
    results_title: "Suggested Remedy",
    condition_label: "Possible condition",
    dosage_label: "Dosage by age group",
    not_recommended: "Not Recommended",
    timing_label: "When to take",
    duration_label: "How long",
    precautions_label: "Precautions",
    disclaimer: "This guidance is generated by an AI system and is advisory only. It is not a \
                 medical diagnosis. Consult a qualified professional before taking any medication.",
    reset_btn: "Start Over",
    privacy_note: "Nothing you enter is stored after this session.",
    suggestion_error: "Unable to analyze symptoms. Please try again with more detail.",
    guidance_error: "Unable to generate guidance. Please consult a professional.",
};

static TA: UiStrings = UiStrings {
    title: "கேர் காம்பஸ்",
    subtitle: "அறிகுறி சரிபார்ப்பு",
    description: "உங்கள் சொந்த வார்த்தைகளில் உங்கள் உடல்நிலையை விவரியுங்கள்; நாங்கள் உதவுகிறோம்.",
    symptoms_label: "அறிகுறிகள்",
    symptoms_placeholder: "எ.கா. நேற்றிலிருந்து தலைவலி மற்றும் லேசான காய்ச்சல் உள்ளது...",
    age_label: "வயது (விரும்பினால்)",
    age_placeholder: "உங்கள் வயதை உள்ளிடவும்",
    submit_btn: "அறிகுறிகளை ஆய்வு செய்",
    loading_text: "உங்கள் அறிகுறிகள் ஆய்வு செய்யப்படுகின்றன...",
    confirm_title: "உங்கள் அறிகுறிகளை உறுதிப்படுத்துங்கள்",
    confirm_desc: "உங்களுக்குப் பொருந்தும் தொடர்புடைய அறிகுறிகளைத் தேர்ந்தெடுக்கவும்.",
    back_btn: "பின்செல்",
    get_results_btn: "வழிகாட்டுதலைப் பெறு",
    results_title: "பரிந்துரைக்கப்பட்ட மருந்து",
    condition_label: "சாத்தியமான நிலை",
    dosage_label: "வயது வாரியான அளவு",
    not_recommended: "பரிந்துரைக்கப்படவில்லை",
    timing_label: "எப்போது எடுக்க வேண்டும்",
    duration_label: "எவ்வளவு காலம்",
    precautions_label: "முன்னெச்சரிக்கைகள்",
    disclaimer: "இந்த வழிகாட்டுதல் AI அமைப்பால் உருவாக்கப்பட்டது; ஆலோசனைக்காக மட்டுமே. இது மருத்துவ \
                 நோயறிதல் அல்ல. மருந்து எடுப்பதற்கு முன் தகுதியான மருத்துவரை அணுகவும்.",
    reset_btn: "மீண்டும் தொடங்கு",
    privacy_note: "நீங்கள் உள்ளிடும் எதுவும் இந்த அமர்வுக்குப் பிறகு சேமிக்கப்படாது.",
    suggestion_error: "அறிகுறிகளை ஆய்வு செய்ய முடியவில்லை. மேலும் விவரங்களுடன் மீண்டும் முயற்சிக்கவும்.",
    guidance_error: "வழிகாட்டுதலை உருவாக்க முடியவில்லை. மருத்துவரை அணுகவும்.",
};

impl UiStrings {
    /// Returns the string table for the given language.
    pub fn for_language(language: Language) -> &'static UiStrings {
        match language {
            Language::En => &EN,
            Language::Ta => &TA,
        }
    }
}
