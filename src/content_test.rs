use super::*;

// =============================================================
// Skill filtering
// =============================================================

#[test]
fn all_tab_lists_every_skill() {
    assert_eq!(matching_skills(None).len(), SKILLS.len());
}

#[test]
fn area_tab_lists_only_that_area() {
    let cicd = matching_skills(Some(SkillArea::CiCd));
    assert!(!cicd.is_empty());
    assert!(cicd.iter().all(|skill| skill.area == SkillArea::CiCd));
}

#[test]
fn area_tabs_partition_the_skill_list() {
    let total: usize = SKILL_TABS
        .iter()
        .filter_map(|(area, _)| *area)
        .map(|area| matching_skills(Some(area)).len())
        .sum();
    assert_eq!(total, SKILLS.len());
}

#[test]
fn every_area_tab_has_at_least_one_skill() {
    for (area, label) in SKILL_TABS {
        let Some(area) = area else { continue };
        assert!(
            !matching_skills(Some(*area)).is_empty(),
            "tab {label} matches no skills"
        );
    }
}

#[test]
fn first_tab_is_all() {
    assert_eq!(SKILL_TABS[0], (None, "All"));
}

// =============================================================
// Content tables
// =============================================================

#[test]
fn skill_names_are_unique() {
    let mut names: Vec<_> = SKILLS.iter().map(|skill| skill.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), SKILLS.len());
}

#[test]
fn pipeline_runs_commit_to_monitor() {
    let labels: Vec<_> = PIPELINE_STAGES.iter().map(|stage| stage.label).collect();
    assert_eq!(labels, ["Commit", "Build", "Test", "Deploy", "Monitor"]);
}

#[test]
fn nav_links_are_in_page_anchors() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('#'), "{} is not an anchor", link.label);
    }
}

#[test]
fn certifications_carry_credential_ids() {
    for cert in CERTIFICATIONS {
        assert!(!cert.credential_id.is_empty(), "{} has no credential", cert.title);
    }
}

#[test]
fn projects_point_at_writeup_pdfs() {
    for project in PROJECTS {
        assert!(
            project.writeup_pdf.starts_with("/certificates/"),
            "{} writeup lives outside the certificates dir",
            project.title
        );
        assert!(!project.tags.is_empty());
    }
}
