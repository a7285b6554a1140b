//! Root application component and shared context providers.

use leptos::prelude::*;

use crate::components::certifications::CertificationsSection;
use crate::components::contact_dialog::ContactDialog;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::mouse_glow::MouseGlow;
use crate::components::navbar::Navbar;
use crate::components::pipeline::PipelineSection;
use crate::components::projects::ProjectsSection;
use crate::components::resume::ResumeSection;
use crate::components::skills::SkillsSection;
use crate::components::toast_stack::ToastStack;
use crate::state::toast::ToastQueue;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides all shared state contexts and stacks the page sections in
/// scroll order.
#[component]
pub fn App() -> impl IntoView {
    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastQueue::default());

    provide_context(ui);
    provide_context(toasts);

    view! {
        <MouseGlow/>
        <Navbar/>
        <main>
            <Hero/>
            <SkillsSection/>
            <ExperienceSection/>
            <CertificationsSection/>
            <PipelineSection/>
            <ProjectsSection/>
            <ResumeSection/>
        </main>
        <Footer/>
        <ContactDialog/>
        <ToastStack/>
    }
}
