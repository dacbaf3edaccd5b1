//! Fixed external URLs. The landing page owns no backend; the editor and the
//! form intake endpoint are both hosted elsewhere.

/// Third-party form intake endpoint the feedback form posts to.
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/mknqyrwe"
}

/// The externally hosted StudyPrint editor.
pub fn get_editor_url() -> &'static str {
    "https://studyprint.vercel.app"
}

pub fn get_repo_url() -> &'static str {
    "https://github.com/uttkarshbhardwaj/studyprint"
}

pub fn get_contact_href() -> &'static str {
    "mailto:hello@studyprint.app"
}
