//! Typed UI label tables for the two supported languages.
//!
//! Every key is a struct field, so a missing translation is a compile
//! error rather than a runtime lookup failure. The completeness check
//! below additionally rejects empty strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub const ALL: &'static [Self] = &[Self::En, Self::Zh];

    pub fn token(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn parse_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(CoreError::UnknownOption(format!("Language: {other}"))),
        }
    }

    /// The language the toggle button switches to.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

/// Every user-visible string of the intake form, for one language.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Labels {
    pub lang_button: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub insurance: &'static str,
    pub pain_area: &'static str,
    pub pain_side: &'static str,
    pub duration: &'static str,
    pub pain_descriptors: &'static str,
    pub pain_level: &'static str,
    pub activity: &'static str,
    pub sitting_hours: &'static str,
    pub goals: &'static str,
    pub notes: &'static str,
    pub consent: &'static str,
    pub submit: &'static str,
    pub loading: &'static str,
    pub success: &'static str,
    pub result_title: &'static str,
}

const EN: Labels = Labels {
    lang_button: "中文",
    title: "Client Intake Form",
    subtitle: "Estimated time: 2 mins",
    name: "Client Name",
    email: "Email",
    insurance: "Insurance Provider",
    pain_area: "Where is the pain?",
    pain_side: "Which side?",
    duration: "How long have you had this?",
    pain_descriptors: "How does it feel?",
    pain_level: "Pain Intensity (0-10)",
    activity: "Daily Activity / Job",
    sitting_hours: "Sitting hours per day",
    goals: "Goal for today",
    notes: "Any Notes?",
    consent: "I consent to treatment and to this form being shared with my therapist",
    submit: "Submit / 送出",
    loading: "Sending data to AI system...",
    success: "Successfully Submitted!",
    result_title: "System Analysis Result",
};

const ZH: Labels = Labels {
    lang_button: "English",
    title: "客户健康评估表",
    subtitle: "预计填写时间：2分钟",
    name: "客户姓名",
    email: "电子邮箱",
    insurance: "保险公司",
    pain_area: "主要疼痛部位",
    pain_side: "疼痛侧别",
    duration: "持续时间",
    pain_descriptors: "疼痛感描述",
    pain_level: "疼痛等级 (0-10)",
    activity: "日常活动/职业",
    sitting_hours: "每天久坐时长",
    goals: "今天治疗的目标",
    notes: "补充说明",
    consent: "我同意接受治疗，并同意将本表格提供给治疗师",
    submit: "Submit / 送出",
    loading: "正在上传至后台分析...",
    success: "提交成功！",
    result_title: "后台系统分析结果",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

impl Labels {
    /// All (key, value) pairs, for the completeness check and for callers
    /// that render the table generically.
    pub fn entries(&self) -> [(&'static str, &'static str); 20] {
        [
            ("lang_button", self.lang_button),
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("name", self.name),
            ("email", self.email),
            ("insurance", self.insurance),
            ("pain_area", self.pain_area),
            ("pain_side", self.pain_side),
            ("duration", self.duration),
            ("pain_descriptors", self.pain_descriptors),
            ("pain_level", self.pain_level),
            ("activity", self.activity),
            ("sitting_hours", self.sitting_hours),
            ("goals", self.goals),
            ("notes", self.notes),
            ("consent", self.consent),
            ("submit", self.submit),
            ("loading", self.loading),
            ("success", self.success),
            ("result_title", self.result_title),
        ]
    }
}

/// Verify at startup that every label exists (non-empty) for every
/// supported language, including the per-option display labels.
pub fn verify_label_tables() -> Result<(), CoreError> {
    use crate::options;

    for &language in Language::ALL {
        for (key, value) in labels(language).entries() {
            if value.is_empty() {
                return Err(CoreError::MissingLabel {
                    language: language.token().to_string(),
                    key: key.to_string(),
                });
            }
        }

        verify_option_labels(language, "pain_area", options::PainArea::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "pain_side", options::PainSide::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "duration", options::Duration::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "pain_descriptor", options::PainDescriptor::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "activity", options::Activity::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "sitting_hours", options::SittingHours::ALL, |o| {
            o.label(language)
        })?;
        verify_option_labels(language, "goal", options::Goal::ALL, |o| o.label(language))?;
    }

    Ok(())
}

fn verify_option_labels<O: Copy>(
    language: Language,
    key: &str,
    all: &[O],
    label: impl Fn(O) -> &'static str,
) -> Result<(), CoreError> {
    for &option in all {
        if label(option).is_empty() {
            return Err(CoreError::MissingLabel {
                language: language.token().to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
