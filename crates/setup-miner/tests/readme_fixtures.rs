use composer_setup_miner::{extract_relevant_sections, extract_setup_steps, SetupStep};
use pretty_assertions::assert_eq;

fn mined(readme: &str) -> Vec<String> {
    extract_setup_steps(readme)
        .into_iter()
        .map(SetupStep::into_string)
        .collect()
}

#[test]
fn queue_monitor_readme_yields_section_steps() {
    let readme = include_str!("fixtures/queue_monitor.md");

    let headers: Vec<String> = extract_relevant_sections(readme)
        .into_iter()
        .map(|s| s.header)
        .collect();
    assert_eq!(headers, vec!["Installation", "Configuration"]);

    assert_eq!(
        mined(readme),
        vec![
            "- Run `composer require acme/queue-monitor`",
            "- Run `php artisan queue-monitor:install`",
            "- Set the `QUEUE_CONNECTION` variable to redis",
            "- Adjust the retention window in `config/queue-monitor.php`",
            "- Run `php artisan vendor:publish --tag=queue-monitor-config`",
        ]
    );
}

#[test]
fn readme_without_relevant_sections_falls_back_to_document_scan() {
    let readme = include_str!("fixtures/no_sections.md");

    assert!(extract_relevant_sections(readme).is_empty());
    assert_eq!(
        mined(readme),
        vec!["- Run `npm run build`", "- Run `composer dump-autoload`"]
    );
}

#[test]
fn mining_is_deterministic() {
    let readme = include_str!("fixtures/queue_monitor.md");
    assert_eq!(mined(readme), mined(readme));
}

#[test]
fn byte_order_mark_prefixed_readme_keeps_leading_section() {
    let readme = include_str!("fixtures/bom_installation.md");
    assert!(readme.starts_with('\u{feff}'));

    assert_eq!(
        mined(readme),
        vec![
            "- Publish the configuration file",
            "- Run `php artisan migrate` to create the tables",
            "- Run `php artisan migrate`",
        ]
    );
}
