use artisthub::error::AppError;
use artisthub::marketplace::catalog::{CATEGORIES, FEE_RANGES};
use artisthub::marketplace::{
    AppState, ApplicationDraft, CatalogController, FormStep, MockGateway, OnboardingForm,
    ReviewController, StatusFilter, SubmissionStatus,
};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Filter the catalog portion of the demo by category
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Filter the catalog portion of the demo by location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Filter the catalog portion of the demo by fee range
    #[arg(long)]
    pub(crate) price_range: Option<String>,
    /// Skip the onboarding walkthrough portion of the demo.
    #[arg(long)]
    pub(crate) skip_onboarding: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        category,
        location,
        price_range,
        skip_onboarding,
    } = args;

    println!("Artist booking marketplace demo");

    println!("\nBrowse categories");
    for category in CATEGORIES {
        println!(
            "- {} ({} listed): {}",
            category.name, category.listed_count, category.description
        );
    }

    let gateway = Arc::new(MockGateway::deterministic());
    let state = AppState::shared();

    let catalog = CatalogController::new(state.clone(), gateway.clone());
    catalog
        .initialize(
            category.as_deref(),
            location.as_deref(),
            price_range.as_deref(),
        )
        .await;

    {
        let state = state.lock().expect("state mutex poisoned");
        println!("\nCatalog ({} artists)", state.artists.len());
        for artist in &state.artists {
            println!(
                "- {} | {} | {} | {} | {:.1} stars ({} reviews){}",
                artist.name,
                artist.categories.join(", "),
                artist.location,
                artist.fee_range,
                artist.rating,
                artist.review_count,
                if artist.verified { " | verified" } else { "" }
            );
        }
        if let Some(error) = &state.error {
            println!("  Catalog unavailable: {error}");
        }
    }

    let review = ReviewController::new(state.clone(), gateway.clone());
    review.load_submissions().await?;
    let stats = review.stats();
    println!(
        "\nSubmission queue: {} total | {} pending | {} approved | {} rejected ({:.0}% approval)",
        stats.total,
        stats.pending,
        stats.approved,
        stats.rejected,
        stats.approval_rate() * 100.0
    );
    for submission in review.visible(StatusFilter::All) {
        println!(
            "- [{}] {} | {} | {} | submitted {}",
            submission.status.label(),
            submission.name,
            submission.categories.join(", "),
            submission.location,
            submission.submitted_at
        );
    }

    let pending = review.visible(StatusFilter::Only(SubmissionStatus::Pending));
    if let Some(first_pending) = pending.first() {
        review
            .set_status(&first_pending.id, SubmissionStatus::Approved)
            .await?;
        println!("Approved submission {} ({})", first_pending.id.0, first_pending.name);
    }

    if skip_onboarding {
        return Ok(());
    }

    println!("\nOnboarding walkthrough");
    println!("Suggested fee ranges: {}", FEE_RANGES.join(", "));
    let mut form = OnboardingForm::new();
    *form.draft_mut() = demo_draft();
    loop {
        println!(
            "- Step {}/{}: {} ({:.0}% complete)",
            form.step().number(),
            OnboardingForm::total_steps(),
            form.step().title(),
            form.progress()
        );
        if form.step() == FormStep::Pricing {
            break;
        }
        match form.advance() {
            Ok(_) => {}
            Err(errors) => {
                for error in errors {
                    println!("  Blocked: {error}");
                }
                return Ok(());
            }
        }
    }

    match form.submit(gateway.as_ref()).await {
        Ok(ack) => println!("- {}", ack.message),
        Err(err) => println!("- Submission failed: {err}"),
    }

    Ok(())
}

fn demo_draft() -> ApplicationDraft {
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
