use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

key_newtype!(BillId);

/// The closed set of expense categories, in the order the creation form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    #[serde(rename = "Services en ligne")]
    ServicesEnLigne,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
    #[serde(rename = "Fournitures de bureau")]
    FournituresDeBureau,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsEtBars,
        ExpenseType::HotelEtLogement,
        ExpenseType::ServicesEnLigne,
        ExpenseType::ItEtElectronique,
        ExpenseType::EquipementEtMateriel,
        ExpenseType::FournituresDeBureau,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseType::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| DomainError::UnknownExpenseType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Label shown in the bills table.
    pub fn display_label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: BillId,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: f64,
    /// ISO `YYYY-MM-DD`; ordering of the bills table is done on this raw string.
    pub date: String,
    #[serde(default)]
    pub vat: String,
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}
