use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::feedback_form::FeedbackForm;
use crate::config;
use crate::utils::reveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Register the reveal regions once the sections are in the DOM; the
    // destructor releases every outstanding observation on unmount.
    {
        use_effect_with_deps(
            move |_| {
                let handle = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| reveal::mount_reveals(&document).ok());
                move || {
                    if let Some(handle) = handle {
                        handle.dispose();
                    }
                }
            },
            (),
        );
    }

    // Opens the externally hosted editor in a new browsing context.
    let on_start = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(config::get_editor_url(), "_blank");
        }
    });

    // Smooth-scrolls to the features section; no-op if it is missing.
    let on_see_features = Callback::from(|_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Some(section) = document.get_element_by_id("features") {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let landing_css = r#"
        .landing-container {
            min-height: 100vh;
            background: #fdfdfb;
            color: #1f2430;
            font-family: 'Inter', 'Segoe UI', sans-serif;
            line-height: 1.6;
        }
        .landing-container h1, .landing-container h2, .landing-container h3 {
            line-height: 1.25;
        }
        .btn {
            border: none;
            border-radius: 10px;
            padding: 0.9rem 1.8rem;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
            transition: transform 0.15s ease, box-shadow 0.15s ease;
        }
        .btn:hover:not(:disabled) {
            transform: translateY(-2px);
            box-shadow: 0 6px 18px rgba(31, 36, 48, 0.15);
        }
        .btn:disabled {
            opacity: 0.6;
            cursor: default;
        }
        .btn-primary {
            background: #3b5bfd;
            color: #fff;
        }
        .btn-secondary {
            background: #eef1ff;
            color: #3b5bfd;
        }
        .btn-large {
            padding: 1.1rem 2.4rem;
            font-size: 1.15rem;
        }
        .hero-section {
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            gap: 3rem;
            max-width: 1100px;
            margin: 0 auto;
            padding: 6rem 2rem 5rem;
        }
        .hero-content {
            flex: 1 1 420px;
        }
        .hero-headline {
            font-size: 2.8rem;
            margin-bottom: 1.2rem;
        }
        .hero-subheadline {
            font-size: 1.2rem;
            color: #4a5164;
            margin-bottom: 2rem;
        }
        .hero-ctas {
            display: flex;
            gap: 1rem;
            flex-wrap: wrap;
            margin-bottom: 1rem;
        }
        .hero-small-text {
            font-size: 0.9rem;
            color: #7a8095;
        }
        .hero-mockup {
            flex: 1 1 320px;
        }
        .mockup-placeholder {
            background: linear-gradient(135deg, #eef1ff, #f9f4ff);
            border: 1px solid #dfe4ff;
            border-radius: 16px;
            padding: 3rem 2rem;
            color: #4a5164;
            text-align: center;
        }
        .section-header {
            text-align: center;
            max-width: 640px;
            margin: 0 auto 3rem;
        }
        .section-header h2 {
            font-size: 2.2rem;
            margin-bottom: 0.6rem;
        }
        .section-header p {
            color: #4a5164;
        }
        .features-section, .how-it-works-section, .info-section, .feedback-section {
            max-width: 1100px;
            margin: 0 auto;
            padding: 4rem 2rem;
        }
        .features-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 1.5rem;
        }
        .feature-card {
            background: #fff;
            border: 1px solid #e8eaf2;
            border-radius: 14px;
            padding: 1.8rem;
        }
        .feature-card h3 {
            margin-bottom: 0.8rem;
        }
        .feature-card p {
            color: #4a5164;
            margin-bottom: 0.5rem;
        }
        .steps-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
            gap: 1.5rem;
        }
        .step-card {
            background: #fff;
            border: 1px solid #e8eaf2;
            border-radius: 14px;
            padding: 2rem 1.8rem;
            text-align: center;
        }
        .step-number {
            width: 2.6rem;
            height: 2.6rem;
            margin: 0 auto 1rem;
            border-radius: 50%;
            background: #3b5bfd;
            color: #fff;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .step-card p {
            color: #4a5164;
        }
        .cta-section {
            background: #1f2430;
            color: #fff;
            text-align: center;
            padding: 5rem 2rem;
        }
        .cta-section h2 {
            font-size: 2.2rem;
            margin-bottom: 0.8rem;
        }
        .cta-section p {
            color: #c3c8d8;
            margin-bottom: 2rem;
        }
        .info-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 2rem;
        }
        .info-block h3 {
            margin-bottom: 1rem;
        }
        .info-block p {
            color: #4a5164;
            margin-bottom: 0.6rem;
        }
        .privacy-list {
            list-style: none;
            padding: 0;
            color: #4a5164;
        }
        .privacy-list li::before {
            content: "✓ ";
            color: #3b5bfd;
        }
        .feedback-section {
            max-width: 640px;
        }
        .feedback-form .form-row {
            display: flex;
            flex-direction: column;
            margin-bottom: 1.2rem;
        }
        .feedback-form label {
            font-weight: 600;
            margin-bottom: 0.4rem;
        }
        .feedback-form input, .feedback-form select, .feedback-form textarea {
            border: 1px solid #d6dae6;
            border-radius: 8px;
            padding: 0.7rem 0.9rem;
            font-size: 1rem;
            font-family: inherit;
        }
        .feedback-form input:focus, .feedback-form select:focus, .feedback-form textarea:focus {
            outline: 2px solid #3b5bfd;
            border-color: transparent;
        }
        .feedback-error {
            color: #c73a3a;
            margin-bottom: 1rem;
        }
        .feedback-success {
            text-align: center;
            background: #fff;
            border: 1px solid #e8eaf2;
            border-radius: 14px;
            padding: 2.5rem 2rem;
        }
        .feedback-success h3 {
            margin-bottom: 0.8rem;
        }
        .feedback-success p {
            color: #4a5164;
            margin-bottom: 1.5rem;
        }
        .footer {
            border-top: 1px solid #e8eaf2;
            padding: 3rem 2rem;
            text-align: center;
            color: #7a8095;
        }
        .footer-links {
            display: flex;
            justify-content: center;
            gap: 1.5rem;
            margin: 1rem 0;
        }
        .footer-links a {
            color: #3b5bfd;
            text-decoration: none;
        }
        .footer-links a:hover {
            text-decoration: underline;
        }
        .tagline {
            font-style: italic;
            margin-top: 0.5rem;
        }
        .reveal {
            opacity: 0;
            transform: translateY(24px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }
        .reveal-visible {
            opacity: 1;
            transform: none;
        }
        @media (prefers-reduced-motion: reduce) {
            .reveal {
                opacity: 1;
                transform: none;
                transition: none;
            }
        }
        @media (max-width: 768px) {
            .hero-section {
                padding: 4rem 1.5rem 3rem;
            }
            .hero-headline {
                font-size: 2.1rem;
            }
            .features-section, .how-it-works-section, .info-section, .feedback-section {
                padding: 3rem 1.5rem;
            }
        }
    "#;

    html! {
        <div class="landing-container">
            <style>{landing_css}</style>

            <header class="hero-section">
                <div class="hero-content">
                    <h1 class="hero-headline">
                        {"Turn your notes into beautiful, printable study sheets — instantly."}
                    </h1>
                    <p class="hero-subheadline">
                        {"StudyPrint helps you convert messy notes into clean, organized A4 study sheets."}
                        <br/>
                        {"Fast, private, and fully offline — no signup required."}
                    </p>
                    <div class="hero-ctas">
                        <button class="btn btn-primary" onclick={on_start.clone()}>{"Start Creating →"}</button>
                        <button class="btn btn-secondary" onclick={on_see_features}>{"See Features"}</button>
                    </div>
                    <p class="hero-small-text">
                        {"100% free. Works offline. No data ever leaves your device."}
                    </p>
                </div>
                <div class="hero-mockup">
                    <div class="mockup-placeholder">
                        <p>{"A clean, distraction-free interface built for students who want focus — not clutter."}</p>
                    </div>
                </div>
            </header>

            <section id="features" class="features-section reveal">
                <div class="section-header">
                    <h2>{"Features"}</h2>
                    <p>{"Built for students — simple, fast, and private."}</p>
                </div>
                <div class="features-grid">
                    <div class="feature-card">
                        <h3>{"🧠 Offline First"}</h3>
                        <p>{"Everything works directly in your browser."}</p>
                        <p>{"Your notes never leave your device — perfect for privacy and low-internet days."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"📝 Printable A4 PDFs"}</h3>
                        <p>{"Export clean, print-ready A4 study sheets with perfect spacing, margins, and structure."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"💾 Auto-Save"}</h3>
                        <p>{"Your notes save automatically in local storage — even if you close the tab."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"🔗 Shareable Links"}</h3>
                        <p>{"Turn your study sheet into a link and share it with classmates in one click."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"🎨 Layout Controls"}</h3>
                        <p>{"Adjust spacing, font size, columns, and structure to match your study style."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"📄 Clean Minimal UI"}</h3>
                        <p>{"No clutter, no ads, no distractions — a workspace built purely for studying."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"🕒 Zero Setup"}</h3>
                        <p>{"Just open the tool and start typing."}</p>
                        <p>{"No account. No friction. Just pure productivity."}</p>
                    </div>
                </div>
            </section>

            <section class="how-it-works-section reveal">
                <div class="section-header">
                    <h2>{"How It Works"}</h2>
                </div>
                <div class="steps-grid">
                    <div class="step-card">
                        <div class="step-number">{"1"}</div>
                        <h3>{"Paste your notes"}</h3>
                        <p>{"Copy from anywhere — school notes, Google Docs, Notion, or your handwritten summaries."}</p>
                    </div>
                    <div class="step-card">
                        <div class="step-number">{"2"}</div>
                        <h3>{"Customize the layout"}</h3>
                        <p>{"Change spacing, font, columns, and structure in seconds."}</p>
                    </div>
                    <div class="step-card">
                        <div class="step-number">{"3"}</div>
                        <h3>{"Export to PDF"}</h3>
                        <p>{"One-click export to a crisp, print-ready A4 sheet."}</p>
                    </div>
                </div>
            </section>

            <section class="cta-section reveal">
                <h2>{"Start creating your study sheets now."}</h2>
                <p>{"No signup required — jump straight into the editor."}</p>
                <button class="btn btn-primary btn-large" onclick={on_start}>{"Start Creating →"}</button>
            </section>

            <section id="privacy" class="info-section reveal">
                <div class="info-grid">
                    <div class="info-block">
                        <h3>{"🧩 About StudyPrint"}</h3>
                        <p>{"StudyPrint is a free, student-focused tool created to make revision easier."}</p>
                        <p>{"Designed for speed, privacy, and simplicity — everything works offline and stays on your device."}</p>
                        <p>{"Built for students who prefer clean, printable study material without distractions."}</p>
                    </div>
                    <div class="info-block">
                        <h3>{"🔐 Privacy"}</h3>
                        <p>{"Your data stays with you."}</p>
                        <p>{"StudyPrint uses zero databases, accounts, or cloud services."}</p>
                        <p>{"Everything is stored locally in your browser."}</p>
                        <ul class="privacy-list">
                            <li>{"No tracking."}</li>
                            <li>{"No analytics."}</li>
                            <li>{"No accounts."}</li>
                            <li>{"Just privacy."}</li>
                        </ul>
                    </div>
                    <div class="info-block">
                        <h3>{"🧒 Built By"}</h3>
                        <p>{"Made by Uttkarsh Bhardwaj"}</p>
                        <p>{"A 15-year-old frontend dev passionate about building simple, useful tools for students."}</p>
                    </div>
                </div>
            </section>

            <section class="feedback-section reveal">
                <div class="section-header">
                    <h2>{"Tell us what you think"}</h2>
                    <p>{"Found a bug? Missing a feature? Every message is read."}</p>
                </div>
                <FeedbackForm />
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <p>{"© 2025 StudyPrint. All rights reserved."}</p>
                    <p>{"Made by Uttkarsh Bhardwaj."}</p>
                    <div class="footer-links">
                        <a href={config::get_repo_url()} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={config::get_contact_href()}>{"Contact"}</a>
                        <a href="#privacy">{"Privacy Policy"}</a>
                    </div>
                    <p class="tagline">{"“Notes → Clean Study Sheets”"}</p>
                </div>
            </footer>
        </div>
    }
}
