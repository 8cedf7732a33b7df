use super::gateway::{BookingGateway, GatewayError};
use super::submission::{ApplicationPayload, SubmissionAck};

/// The three ordered onboarding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormStep {
    Identity,
    Skills,
    Pricing,
}

impl FormStep {
    pub const COUNT: u8 = 3;

    pub const fn number(self) -> u8 {
        match self {
            FormStep::Identity => 1,
            FormStep::Skills => 2,
            FormStep::Pricing => 3,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            FormStep::Identity => "Personal Information",
            FormStep::Skills => "Skills & Languages",
            FormStep::Pricing => "Pricing & Location",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            FormStep::Identity => Some(FormStep::Skills),
            FormStep::Skills => Some(FormStep::Pricing),
            FormStep::Pricing => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            FormStep::Identity => None,
            FormStep::Skills => Some(FormStep::Identity),
            FormStep::Pricing => Some(FormStep::Skills),
        }
    }

    /// Fields owned by this step; advancement validates only these.
    pub const fn fields(self) -> &'static [FormField] {
        match self {
            FormStep::Identity => &[
                FormField::Name,
                FormField::Bio,
                FormField::Email,
                FormField::Phone,
            ],
            FormStep::Skills => &[FormField::Categories, FormField::Languages],
            FormStep::Pricing => &[FormField::FeeRange, FormField::Location],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Bio,
    Email,
    Phone,
    Categories,
    Languages,
    FeeRange,
    Location,
}

impl FormField {
    pub const fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Bio => "bio",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Categories => "categories",
            FormField::Languages => "languages",
            FormField::FeeRange => "feeRange",
            FormField::Location => "location",
        }
    }
}

/// A single failed field check, surfaced next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", field.name())]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// In-progress form values. Not persisted anywhere; a reload starts over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationDraft {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
}

impl ApplicationDraft {
    fn check_field(&self, field: FormField) -> Option<ValidationError> {
        match field {
            FormField::Name => {
                let len = self.name.chars().count();
                if len < 2 {
                    Some(ValidationError::new(field, "Name must be at least 2 characters"))
                } else if len > 50 {
                    Some(ValidationError::new(field, "Name too long"))
                } else {
                    None
                }
            }
            FormField::Bio => {
                let len = self.bio.chars().count();
                if len < 50 {
                    Some(ValidationError::new(field, "Bio must be at least 50 characters"))
                } else if len > 500 {
                    Some(ValidationError::new(field, "Bio too long"))
                } else {
                    None
                }
            }
            FormField::Email => {
                if is_valid_email(&self.email) {
                    None
                } else {
                    Some(ValidationError::new(field, "Please enter a valid email"))
                }
            }
            FormField::Phone => {
                if is_valid_phone(&self.phone) {
                    None
                } else {
                    Some(ValidationError::new(field, "Please enter a valid phone number"))
                }
            }
            FormField::Categories => {
                if self.categories.is_empty() {
                    Some(ValidationError::new(field, "Please select at least one category"))
                } else if self.categories.len() > 5 {
                    Some(ValidationError::new(field, "Maximum 5 categories"))
                } else {
                    None
                }
            }
            FormField::Languages => {
                if self.languages.is_empty() {
                    Some(ValidationError::new(field, "Please select at least one language"))
                } else {
                    None
                }
            }
            FormField::FeeRange => {
                if self.fee_range.trim().is_empty() {
                    Some(ValidationError::new(field, "Please select a fee range"))
                } else {
                    None
                }
            }
            FormField::Location => {
                let len = self.location.chars().count();
                if len < 2 {
                    Some(ValidationError::new(field, "Location is required"))
                } else if len > 100 {
                    Some(ValidationError::new(field, "Location too long"))
                } else {
                    None
                }
            }
        }
    }

    /// Errors for the fields owned by one step only.
    pub fn validate_step(&self, step: FormStep) -> Vec<ValidationError> {
        step.fields()
            .iter()
            .filter_map(|&field| self.check_field(field))
            .collect()
    }

    /// Errors across the whole form, in step order.
    pub fn validate(&self) -> Vec<ValidationError> {
        [FormStep::Identity, FormStep::Skills, FormStep::Pricing]
            .into_iter()
            .flat_map(|step| self.validate_step(step))
            .collect()
    }

    pub fn to_payload(&self) -> ApplicationPayload {
        ApplicationPayload {
            name: self.name.clone(),
            bio: self.bio.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            categories: self.categories.clone(),
            languages: self.languages.clone(),
            fee_range: self.fee_range.clone(),
            location: self.location.clone(),
        }
    }
}

impl From<ApplicationPayload> for ApplicationDraft {
    fn from(payload: ApplicationPayload) -> Self {
        Self {
            name: payload.name,
            bio: payload.bio,
            email: payload.email,
            phone: payload.phone,
            categories: payload.categories,
            languages: payload.languages,
            fee_range: payload.fee_range,
            location: payload.location,
        }
    }
}

fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// Mirrors the legacy pattern: optional leading '+', first digit 1-9, at most 16
// digits, and at least 10 characters overall.
fn is_valid_phone(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.len() < 10 {
        return false;
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || digits.len() > 16 {
        return false;
    }
    let mut chars = digits.chars();
    matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit())
}

/// Why a submission attempt was refused.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form is not on the final step")]
    NotOnFinalStep,
    #[error("application has {} validation error(s)", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Explicit state machine over the three onboarding steps. Moving forward is
/// gated on the current step's fields; moving backward never validates and
/// keeps everything entered.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    step: FormStep,
    draft: ApplicationDraft,
    completed: bool,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            step: FormStep::Identity,
            draft: ApplicationDraft::default(),
            completed: false,
        }
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    /// Terminal success state; only reached through a successful [`submit`].
    ///
    /// [`submit`]: OnboardingForm::submit
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Completion percentage for the progress bar.
    pub fn progress(&self) -> f32 {
        (self.step.number() as f32 / Self::total_steps() as f32 * 100.0).clamp(0.0, 100.0)
    }

    pub const fn total_steps() -> u8 {
        FormStep::COUNT
    }

    /// Validate the current step's fields and move forward. On the last step
    /// this is a no-op; submission is a separate action.
    pub fn advance(&mut self) -> Result<FormStep, Vec<ValidationError>> {
        let errors = self.draft.validate_step(self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back one step without validating anything.
    pub fn back(&mut self) -> FormStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Submit the finished form. Only legal on the final step; the full draft
    /// is re-validated so earlier edits cannot sneak past. A gateway failure
    /// leaves the draft and step untouched, so resubmission re-attempts
    /// cleanly.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<SubmissionAck, SubmitError>
    where
        G: BookingGateway,
    {
        if self.step != FormStep::Pricing {
            return Err(SubmitError::NotOnFinalStep);
        }

        let errors = self.draft.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        let ack = gateway.submit_application(self.draft.to_payload()).await?;
        self.completed = true;
        Ok(ack)
    }

    /// Start over after the success screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            name: "Nina Duarte".to_string(),
            bio: "Award-winning flamenco guitarist with fifteen years of stage experience across festivals and private events.".to_string(),
            email: "nina@example.com".to_string(),
            phone: "+14155550123".to_string(),
            categories: vec!["Singers".to_string()],
            languages: vec!["English".to_string(), "Spanish".to_string()],
            fee_range: "$400-700".to_string(),
            location: "Austin, TX".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_every_step() {
        let draft = valid_draft();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn short_bio_fails_identity_step() {
        let mut draft = valid_draft();
        draft.bio = "Too short.".to_string();
        let errors = draft.validate_step(FormStep::Identity);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FormField::Bio);
        assert_eq!(errors[0].message, "Bio must be at least 50 characters");
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        let mut draft = valid_draft();
        for bad in ["", "plainaddress", "no@tld", "two@@ats.com", "a b@c.com", "@missing.local"] {
            draft.email = bad.to_string();
            assert!(
                !draft.validate_step(FormStep::Identity).is_empty(),
                "expected '{bad}' to be rejected"
            );
        }
        draft.email = "artist@example.co".to_string();
        assert!(draft
            .validate_step(FormStep::Identity)
            .iter()
            .all(|err| err.field != FormField::Email));
    }

    #[test]
    fn phone_validation_mirrors_legacy_pattern() {
        let mut draft = valid_draft();
        for bad in ["123", "0123456789", "+0123456789", "not-a-number", "+123456789012345678"] {
            draft.phone = bad.to_string();
            assert!(
                draft
                    .validate_step(FormStep::Identity)
                    .iter()
                    .any(|err| err.field == FormField::Phone),
                "expected '{bad}' to be rejected"
            );
        }
        for good in ["4155550123", "+14155550123"] {
            draft.phone = good.to_string();
            assert!(draft
                .validate_step(FormStep::Identity)
                .iter()
                .all(|err| err.field != FormField::Phone));
        }
    }

    #[test]
    fn category_limit_is_five() {
        let mut draft = valid_draft();
        draft.categories = (0..6).map(|i| format!("Category {i}")).collect();
        let errors = draft.validate_step(FormStep::Skills);
        assert_eq!(errors[0].message, "Maximum 5 categories");
    }

    #[test]
    fn advance_checks_only_current_step_fields() {
        let mut form = OnboardingForm::new();
        *form.draft_mut() = valid_draft();
        // Break a later-step field; Identity must still advance.
        form.draft_mut().fee_range.clear();

        assert_eq!(form.advance().expect("identity valid"), FormStep::Skills);
        assert_eq!(form.advance().expect("skills valid"), FormStep::Pricing);
        assert!(form.advance().is_err());
    }

    #[test]
    fn back_never_validates_and_preserves_values() {
        let mut form = OnboardingForm::new();
        *form.draft_mut() = valid_draft();
        form.advance().expect("to skills");
        form.draft_mut().categories.clear();

        assert_eq!(form.back(), FormStep::Identity);
        assert_eq!(form.draft().name, "Nina Duarte");
        assert_eq!(form.back(), FormStep::Identity);
    }

    #[test]
    fn progress_tracks_step_number() {
        let mut form = OnboardingForm::new();
        *form.draft_mut() = valid_draft();
        assert!((form.progress() - 100.0 / 3.0).abs() < 0.01);
        form.advance().expect("to skills");
        form.advance().expect("to pricing");
        assert!((form.progress() - 100.0).abs() < f32::EPSILON);
    }
}
