use composer_setup_miner::SetupStep;

pub const SETUP_HEADER: &str = "After installation, complete these additional setup steps:";

/// `composer require <package>[:<version>]`; an empty version counts as none.
pub fn install_command(package: &str, version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!("composer require {package}:{version}"),
        None => format!("composer require {package}"),
    }
}

/// Render the advisory text returned by `install_package`.
pub fn compose(package: &str, version: Option<&str>, steps: &[SetupStep]) -> String {
    let version = version.filter(|v| !v.is_empty());
    let label = match version {
        Some(version) => format!("{package} ({version})"),
        None => package.to_string(),
    };
    let mut text = format!(
        "To install {label}, run the following command:\n\n```\n{}\n```",
        install_command(package, version)
    );

    if !steps.is_empty() {
        text.push_str("\n\n");
        text.push_str(SETUP_HEADER);
        for step in steps {
            text.push('\n');
            text.push_str(step.as_str());
        }
    }
    text
}
