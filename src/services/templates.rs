use crate::domain::care_plan::{
    CarePlan, CarePlanRequest, DayPlan, Reminder, Resource, ResourceType, ReturnToWorkGuidance,
};
use once_cell::sync::Lazy;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day(day: u32, focus: &str, tasks: &[&str], checkpoints: &[&str]) -> DayPlan {
    DayPlan {
        day,
        focus: focus.into(),
        tasks: lines(tasks),
        checkpoints: lines(checkpoints),
    }
}

fn resource(title: &str, kind: ResourceType, contact: Option<&str>, description: &str) -> Resource {
    Resource {
        title: title.into(),
        kind,
        contact: contact.map(str::to_string),
        description: description.into(),
    }
}

fn reminder(day: u32, message: &str, action: &str) -> Reminder {
    Reminder {
        day,
        message: message.into(),
        action: action.into(),
    }
}

// ─────────────────────────────────────────────────────────
// FLU / FEVER / COLD
// ─────────────────────────────────────────────────────────
pub static FLU_RECOVERY: Lazy<CarePlan> = Lazy::new(|| CarePlan {
    title: "Flu Recovery & Wellness Plan".into(),
    overview: "A comprehensive approach to flu recovery focusing on rest, hydration, and gradual return to normal activities while preventing transmission to colleagues.".into(),
    estimated_recovery_time: "3-5 days".into(),
    daily_plan: vec![
        day(
            1,
            "Rest & Symptom Management",
            &[
                "Stay home and rest - avoid all work activities",
                "Drink 8-10 glasses of warm fluids (water, herbal tea, broth)",
                "Take paracetamol or ibuprofen for fever and aches as directed",
                "Monitor temperature every 4 hours",
            ],
            &["Fever below 38°C for 24 hours", "Able to keep fluids down"],
        ),
        day(
            2,
            "Continued Recovery",
            &[
                "Maintain bed rest if fever persists",
                "Eat light, nutritious foods (toast, soup, fruits)",
                "Take warm baths to ease muscle aches",
                "Avoid dairy if experiencing congestion",
            ],
            &["Energy levels stabilizing", "Appetite returning"],
        ),
        day(
            3,
            "Gradual Activity Return",
            &[
                "Light movement around the house if feeling better",
                "Fresh air outside for 10-15 minutes if no fever",
                "Prepare for return-to-work assessment",
                "Contact manager about return timeline",
            ],
            &["24 hours fever-free", "Feeling 80% normal energy"],
        ),
    ],
    resources: vec![
        resource(
            "Healthline NZ",
            ResourceType::NzHealthService,
            Some("0800-611-116"),
            "24/7 health advice from registered nurses for flu management",
        ),
        resource(
            "WorkSafe NZ - Infectious Disease Guidelines",
            ResourceType::AccResource,
            Some("0800-030-040"),
            "Workplace guidelines for preventing flu transmission",
        ),
        resource(
            "Flu Recovery Nutrition Guide",
            ResourceType::WellnessTip,
            None,
            "Foods and supplements that support immune system recovery",
        ),
    ],
    return_to_work_guidance: ReturnToWorkGuidance {
        gradual_return: true,
        accommodations: lines(&[
            "Work from home option for first 2 days back",
            "Reduced hours (6 hours) for first week",
            "Frequent breaks for hydration",
            "Avoid meetings with vulnerable colleagues initially",
        ]),
        check_in_schedule: lines(&[
            "Day 3: Return-to-work readiness assessment",
            "Week 1: Energy level evaluation",
        ]),
    },
    red_flags: lines(&[
        "Difficulty breathing or shortness of breath",
        "Persistent high fever above 39°C for more than 3 days",
        "Severe headache with neck stiffness",
        "Dehydration (dizziness, dry mouth, little/no urination)",
    ]),
    follow_up_reminders: vec![
        reminder(
            3,
            "How are your energy levels? Ready to discuss gradual return to work?",
            "Contact manager if feeling 80% better",
        ),
        reminder(
            7,
            "Follow-up: Any lingering symptoms or concerns?",
            "Schedule check-in with occupational health if needed",
        ),
    ],
});

// ─────────────────────────────────────────────────────────
// STRESS / ANXIETY / BURNOUT
// ─────────────────────────────────────────────────────────
pub static MENTAL_HEALTH: Lazy<CarePlan> = Lazy::new(|| CarePlan {
    title: "Mental Health & Stress Recovery Plan".into(),
    overview: "A supportive approach to managing work-related stress and anxiety, focusing on immediate relief and building long-term resilience strategies.".into(),
    estimated_recovery_time: "3-7 days".into(),
    daily_plan: vec![
        day(
            1,
            "Immediate Stress Relief",
            &[
                "Contact Employee Assistance Programme (EAP) for immediate support",
                "Practice deep breathing: 4-7-8 technique (inhale 4, hold 7, exhale 8)",
                "Disconnect from work emails and calls completely",
                "Engage in calming activities (warm bath, gentle music, reading)",
            ],
            &["Feeling less overwhelmed", "Able to focus on breathing exercises"],
        ),
        day(
            2,
            "Mindfulness & Self-Care",
            &[
                "Try 10-minute guided meditation (Headspace or Calm apps)",
                "Take a 20-minute walk in nature or local park",
                "Journal about stressors and feelings",
                "Ensure 8+ hours of quality sleep",
            ],
            &["Improved sleep quality", "Reduced physical tension"],
        ),
        day(
            3,
            "Support & Planning",
            &[
                "Speak with trusted friend or family member",
                "Identify specific work stressors for discussion with manager",
                "Plan workload management strategies",
                "Consider flexible work arrangements",
            ],
            &["Clear about return-to-work needs", "Support network activated"],
        ),
    ],
    resources: vec![
        resource(
            "EAP Services NZ",
            ResourceType::NzHealthService,
            Some("0800-327-669"),
            "Free confidential counseling for work-related stress",
        ),
        resource(
            "Mental Health Foundation NZ",
            ResourceType::NzHealthService,
            Some("09-623-4704"),
            "Resources and support for workplace mental health",
        ),
        resource(
            "Lifeline Aotearoa",
            ResourceType::EmergencyContact,
            Some("0800-543-354"),
            "24/7 crisis support for urgent mental health needs",
        ),
        resource(
            "Workplace Stress Management Guide",
            ResourceType::WellnessTip,
            None,
            "Evidence-based strategies for managing work-related stress",
        ),
    ],
    return_to_work_guidance: ReturnToWorkGuidance {
        gradual_return: true,
        accommodations: lines(&[
            "Reduced workload for first 2 weeks",
            "Flexible start/finish times to avoid peak stress",
            "Regular check-ins with manager (weekly initially)",
            "Option to work from home 1-2 days per week",
            "Temporary delegation of high-pressure tasks",
        ]),
        check_in_schedule: lines(&[
            "Day 3: Readiness and accommodation discussion",
            "Week 1: Workload and stress level assessment",
            "Month 1: Long-term wellness strategy review",
        ]),
    },
    red_flags: lines(&[
        "Thoughts of self-harm or suicide",
        "Unable to sleep for multiple nights",
        "Panic attacks or severe anxiety episodes",
        "Complete inability to function in daily activities",
    ]),
    follow_up_reminders: vec![
        reminder(
            3,
            "How are you feeling? Ready to talk about return-to-work support?",
            "Schedule meeting with manager and HR",
        ),
        reminder(
            7,
            "Check-in: How are the stress management techniques working?",
            "Book follow-up EAP session if needed",
        ),
        reminder(
            30,
            "Monthly wellness check: How is your work-life balance?",
            "Review and adjust accommodation strategies",
        ),
    ],
});

// ─────────────────────────────────────────────────────────
// BACK / INJURY
// ─────────────────────────────────────────────────────────
pub static BACK_INJURY: Lazy<CarePlan> = Lazy::new(|| CarePlan {
    title: "Back Injury Recovery & Return Plan".into(),
    overview: "Evidence-based approach to back injury recovery with focus on pain management, gradual mobility improvement, and workplace ergonomic assessment.".into(),
    estimated_recovery_time: "5-10 days".into(),
    daily_plan: vec![
        day(
            1,
            "Pain Management & Rest",
            &[
                "Apply ice for 15-20 minutes every 2-3 hours for first 48 hours",
                "Take anti-inflammatory medication as prescribed",
                "Avoid bed rest - gentle movement is better",
                "Sleep on firm surface with pillow between knees",
            ],
            &["Pain manageable with medication", "Able to move without severe pain"],
        ),
        day(
            3,
            "Gentle Movement",
            &[
                "Switch to heat therapy (warm compress) after 48 hours",
                "Begin gentle stretching: knee-to-chest, pelvic tilts",
                "Short walks (5-10 minutes) every few hours",
                "Maintain good posture when sitting",
            ],
            &["Increased mobility", "Reduced stiffness"],
        ),
        day(
            5,
            "Strengthening & Preparation",
            &[
                "Core strengthening exercises (as tolerated)",
                "Assess home/work ergonomics",
                "Practice proper lifting techniques",
                "Schedule ergonomic assessment for return to work",
            ],
            &["Can perform daily activities", "Confidence in movement returning"],
        ),
    ],
    resources: vec![
        resource(
            "ACC Injury Support",
            ResourceType::AccResource,
            Some("0800-101-996"),
            "Coverage for injury treatment and workplace assessments",
        ),
        resource(
            "Physiotherapy Services",
            ResourceType::NzHealthService,
            Some("Book through GP"),
            "Professional back injury rehabilitation",
        ),
        resource(
            "WorkSafe NZ Ergonomics",
            ResourceType::AccResource,
            Some("0800-030-040"),
            "Workplace ergonomic assessment and guidelines",
        ),
    ],
    return_to_work_guidance: ReturnToWorkGuidance {
        gradual_return: true,
        accommodations: lines(&[
            "Ergonomic workstation assessment before return",
            "Sit-stand desk or regular position changes",
            "No heavy lifting (under 10kg) for 2 weeks",
            "Regular stretching breaks every 30 minutes",
            "Option to work from home if commute is problematic",
        ]),
        check_in_schedule: lines(&[
            "Day 5: Mobility and readiness assessment",
            "Week 2: Ergonomic setup evaluation",
            "Month 1: Long-term prevention strategy",
        ]),
    },
    red_flags: lines(&[
        "Severe pain that worsens despite medication",
        "Numbness or tingling in legs",
        "Loss of bladder or bowel control",
        "Inability to bear weight or walk",
    ]),
    follow_up_reminders: vec![
        reminder(
            5,
            "How is your mobility? Ready for ergonomic assessment?",
            "Schedule workplace assessment with facilities team",
        ),
        reminder(
            14,
            "Follow-up: How is your back feeling at work?",
            "Adjust ergonomic setup if needed",
        ),
    ],
});

/// Generic plan for requests no condition template covers. Title and
/// recovery estimate echo the request.
pub fn fallback(request: &CarePlanRequest) -> CarePlan {
    CarePlan {
        title: format!(
            "Recovery Plan for {}",
            request.category.as_str().replacen('-', " ", 1)
        ),
        overview: "A structured approach to recovery and return to wellness.".into(),
        estimated_recovery_time: request.duration.clone(),
        daily_plan: vec![
            day(
                1,
                "Rest and Initial Care",
                &["Focus on rest and recovery", "Stay hydrated", "Monitor symptoms"],
                &["Assess symptom severity", "Note any changes"],
            ),
            day(
                2,
                "Gradual Activity",
                &[
                    "Light activity as tolerated",
                    "Continue symptom monitoring",
                    "Maintain nutrition",
                ],
                &["Energy levels improving", "Symptoms stabilizing"],
            ),
        ],
        resources: vec![resource(
            "Healthline NZ",
            ResourceType::NzHealthService,
            Some("0800-611-116"),
            "24/7 health advice from registered nurses",
        )],
        return_to_work_guidance: ReturnToWorkGuidance {
            gradual_return: true,
            accommodations: lines(&["Flexible start times", "Regular breaks"]),
            check_in_schedule: lines(&["Day 3 manager check-in"]),
        },
        red_flags: lines(&["Worsening symptoms", "Severe pain", "Difficulty breathing"]),
        follow_up_reminders: vec![reminder(
            3,
            "How are you feeling? Ready to discuss return to work?",
            "Contact manager if feeling better",
        )],
    }
}
