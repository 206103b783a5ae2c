use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SupportService {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub contact: &'static str,
    pub available: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthArticle {
    pub title: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

const fn service(
    name: &'static str,
    kind: &'static str,
    contact: &'static str,
    available: &'static str,
) -> SupportService {
    SupportService {
        name,
        kind,
        contact,
        available,
    }
}

const fn article(title: &'static str, category: &'static str, read_time: &'static str) -> HealthArticle {
    HealthArticle {
        title,
        category,
        read_time,
    }
}

pub const SUPPORT_SERVICES: &[SupportService] = &[
    service("EAP Services NZ", "Counseling", "0800-327-669", "24/7"),
    service("WorkSafe NZ Health Line", "Workplace Safety", "0800-030-040", "Mon-Fri 8:30-5"),
    service("Mental Health Foundation NZ", "Mental Health Support", "09-623-4704", "Mon-Fri 9-5"),
    service("ACC Injury Support", "Injury & Recovery", "0800-101-996", "24/7"),
    service("Healthline NZ", "Medical Advice", "0800-611-116", "24/7"),
    service("Lifeline Aotearoa", "Crisis Support", "0800-543-354", "24/7"),
];

pub const HEALTH_LIBRARY: &[HealthArticle] = &[
    article("Managing Work Stress in NZ Workplace", "Mental Health", "5 min"),
    article("Preventing Back Injury at Work", "Physical Health", "4 min"),
    article("Winter Wellness in New Zealand", "Illness Prevention", "3 min"),
    article("Sleep Hygiene for Shift Workers", "Wellness", "6 min"),
    article("Nutrition for Recovery - NZ Guidelines", "Physical Health", "7 min"),
    article("Building Resilience at Work", "Mental Health", "8 min"),
    article("Understanding ACC Claims Process", "Workplace Safety", "5 min"),
    article("Mental Health Awareness Week NZ", "Mental Health", "4 min"),
    article("Workplace Ergonomics Guide", "Physical Health", "6 min"),
    article("Dealing with Workplace Bullying", "Mental Health", "7 min"),
    article("First Aid Basics for Office Workers", "Workplace Safety", "8 min"),
    article("Healthy Eating on a Budget NZ", "Wellness", "5 min"),
];

pub fn library(category: Option<&str>) -> Vec<HealthArticle> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => HEALTH_LIBRARY
            .iter()
            .filter(|a| a.category.eq_ignore_ascii_case(category))
            .copied()
            .collect(),
        None => HEALTH_LIBRARY.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_filters_by_category() {
        assert_eq!(library(None).len(), 12);
        assert_eq!(library(Some("mental health")).len(), 4);
        assert_eq!(library(Some(" ")).len(), 12);
        assert!(library(Some("Astrology")).is_empty());
    }

    #[test]
    fn directory_lists_crisis_line() {
        assert!(SUPPORT_SERVICES
            .iter()
            .any(|s| s.name == "Lifeline Aotearoa" && s.contact == "0800-543-354"));
    }
}
