//! # 提供サービス
//!
//! Main Site のトップページとサービス一覧に表示する、会社の提供サービス。

use derive_more::Display;
use serde::Serialize;

/// 提供サービス ID（DB の連番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ServiceOfferingId(i64);

impl ServiceOfferingId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 提供サービス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    id:          ServiceOfferingId,
    name:        String,
    description: Option<String>,
}

impl ServiceOffering {
    pub fn from_db(id: ServiceOfferingId, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    pub fn id(&self) -> ServiceOfferingId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// 投入前の提供サービス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewServiceOffering {
    pub name:        &'static str,
    pub description: Option<&'static str>,
}

/// 初回起動時に投入する提供サービス
pub const SEED_SERVICE_OFFERINGS: &[NewServiceOffering] = &[
    NewServiceOffering {
        name:        "Penetration Testing",
        description: Some("Professional security audits and vulnerability assessments"),
    },
    NewServiceOffering {
        name:        "Security Consulting",
        description: Some("Expert security guidance for your infrastructure"),
    },
    NewServiceOffering {
        name:        "Incident Response",
        description: Some("24/7 security incident handling and forensics"),
    },
];
