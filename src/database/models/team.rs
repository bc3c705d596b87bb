use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: Uuid,
    pub role: TeamRole,
    pub display_name: String,
}

/// Roster roles. The playing roles (capitaine, joueur, remplaçant) form the
/// "active" set that attendance thresholds are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Manager,
    Coach,
    Capitaine,
    Joueur,
    Remplacant,
}

impl TeamRole {
    pub fn is_player(&self) -> bool {
        matches!(
            self,
            TeamRole::Capitaine | TeamRole::Joueur | TeamRole::Remplacant
        )
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamRole::Owner => write!(f, "owner"),
            TeamRole::Manager => write!(f, "manager"),
            TeamRole::Coach => write!(f, "coach"),
            TeamRole::Capitaine => write!(f, "capitaine"),
            TeamRole::Joueur => write!(f, "joueur"),
            TeamRole::Remplacant => write!(f, "remplacant"),
        }
    }
}

impl std::str::FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(TeamRole::Owner),
            "manager" => Ok(TeamRole::Manager),
            "coach" => Ok(TeamRole::Coach),
            "capitaine" => Ok(TeamRole::Capitaine),
            "joueur" => Ok(TeamRole::Joueur),
            // legacy rows carry the accented spelling
            "remplacant" | "remplaçant" => Ok(TeamRole::Remplacant),
            _ => Err(format!("Invalid team role: {}", s)),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for TeamRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for TeamRole {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let s = self.to_string();
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&s, buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for TeamRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        s.parse::<TeamRole>().map_err(|e| e.into())
    }
}
