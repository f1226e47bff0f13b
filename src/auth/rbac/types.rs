//! RBAC type definitions

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Studio role identifiers
///
/// The role set is fixed. Accounts carry the identifier as a plain string,
/// and [`RoleId::resolve`] maps anything unrecognized to [`RoleId::Viewer`]
/// so a stale or mistyped role never grants more than read-only access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleId {
    Admin,
    Manager,
    Designer,
    Renderer,
    Sales,
    Viewer,
}

impl RoleId {
    /// All roles, highest authority level first
    pub const ALL: [RoleId; 6] = [
        RoleId::Admin,
        RoleId::Manager,
        RoleId::Designer,
        RoleId::Renderer,
        RoleId::Sales,
        RoleId::Viewer,
    ];

    /// Stable string identifier stored on user accounts
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleId::Admin => "admin",
            RoleId::Manager => "manager",
            RoleId::Designer => "designer",
            RoleId::Renderer => "renderer",
            RoleId::Sales => "sales",
            RoleId::Viewer => "viewer",
        }
    }

    /// Resolve a stored role identifier, degrading unknown values to viewer
    pub fn resolve(identifier: &str) -> RoleId {
        match identifier {
            "admin" => RoleId::Admin,
            "manager" => RoleId::Manager,
            "designer" => RoleId::Designer,
            "renderer" => RoleId::Renderer,
            "sales" => RoleId::Sales,
            "viewer" => RoleId::Viewer,
            _ => RoleId::Viewer,
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(RoleId::Admin),
            "manager" => Ok(RoleId::Manager),
            "designer" => Ok(RoleId::Designer),
            "renderer" => Ok(RoleId::Renderer),
            "sales" => Ok(RoleId::Sales),
            "viewer" => Ok(RoleId::Viewer),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Permissions understood by the back office
///
/// Variants are declared in catalog order, so deriving `Ord` keeps sorted
/// permission lists aligned with the numeric catalog ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ProjectCreate,
    ProjectRead,
    ProjectUpdate,
    ProjectDelete,
    ProjectStatusUpdate,
    ClientCreate,
    ClientRead,
    ClientUpdate,
    ClientDelete,
    ClientExport,
    TeamCreate,
    TeamRead,
    TeamUpdate,
    TeamDelete,
    TeamSalaryView,
    TeamSalaryManage,
    FinanceRead,
    FinanceUpdate,
    FinanceExport,
    FinanceCostManage,
    SettingsRead,
    SettingsUpdate,
    SettingsExchangeRate,
    FileUpload,
    FileDownload,
    FileDelete,
    FileGeneratePdf,
    NotificationSend,
    NotificationManage,
    UserManage,
    RoleManage,
    SystemAdmin,
}

impl Permission {
    /// Every permission, in catalog order
    pub const ALL: [Permission; 32] = [
        Permission::ProjectCreate,
        Permission::ProjectRead,
        Permission::ProjectUpdate,
        Permission::ProjectDelete,
        Permission::ProjectStatusUpdate,
        Permission::ClientCreate,
        Permission::ClientRead,
        Permission::ClientUpdate,
        Permission::ClientDelete,
        Permission::ClientExport,
        Permission::TeamCreate,
        Permission::TeamRead,
        Permission::TeamUpdate,
        Permission::TeamDelete,
        Permission::TeamSalaryView,
        Permission::TeamSalaryManage,
        Permission::FinanceRead,
        Permission::FinanceUpdate,
        Permission::FinanceExport,
        Permission::FinanceCostManage,
        Permission::SettingsRead,
        Permission::SettingsUpdate,
        Permission::SettingsExchangeRate,
        Permission::FileUpload,
        Permission::FileDownload,
        Permission::FileDelete,
        Permission::FileGeneratePdf,
        Permission::NotificationSend,
        Permission::NotificationManage,
        Permission::UserManage,
        Permission::RoleManage,
        Permission::SystemAdmin,
    ];

    /// Stable string identifier used in configuration and over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ProjectCreate => "project_create",
            Permission::ProjectRead => "project_read",
            Permission::ProjectUpdate => "project_update",
            Permission::ProjectDelete => "project_delete",
            Permission::ProjectStatusUpdate => "project_status_update",
            Permission::ClientCreate => "client_create",
            Permission::ClientRead => "client_read",
            Permission::ClientUpdate => "client_update",
            Permission::ClientDelete => "client_delete",
            Permission::ClientExport => "client_export",
            Permission::TeamCreate => "team_create",
            Permission::TeamRead => "team_read",
            Permission::TeamUpdate => "team_update",
            Permission::TeamDelete => "team_delete",
            Permission::TeamSalaryView => "team_salary_view",
            Permission::TeamSalaryManage => "team_salary_manage",
            Permission::FinanceRead => "finance_read",
            Permission::FinanceUpdate => "finance_update",
            Permission::FinanceExport => "finance_export",
            Permission::FinanceCostManage => "finance_cost_manage",
            Permission::SettingsRead => "settings_read",
            Permission::SettingsUpdate => "settings_update",
            Permission::SettingsExchangeRate => "settings_exchange_rate",
            Permission::FileUpload => "file_upload",
            Permission::FileDownload => "file_download",
            Permission::FileDelete => "file_delete",
            Permission::FileGeneratePdf => "file_generate_pdf",
            Permission::NotificationSend => "notification_send",
            Permission::NotificationManage => "notification_manage",
            Permission::UserManage => "user_manage",
            Permission::RoleManage => "role_manage",
            Permission::SystemAdmin => "system_admin",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

/// Functional area a permission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Project,
    Client,
    Team,
    Finance,
    Settings,
    File,
    Notification,
    System,
}

impl PermissionCategory {
    /// Human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            PermissionCategory::Project => "Project management",
            PermissionCategory::Client => "Client management",
            PermissionCategory::Team => "Team management",
            PermissionCategory::Finance => "Finance management",
            PermissionCategory::Settings => "System settings",
            PermissionCategory::File => "File management",
            PermissionCategory::Notification => "Notification management",
            PermissionCategory::System => "System administration",
        }
    }
}

/// Catalog entry describing a single permission
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PermissionDescriptor {
    /// Numeric catalog id
    pub id: u16,
    /// The permission itself
    pub permission: Permission,
    /// What the permission allows
    pub description: &'static str,
    /// Functional area
    pub category: PermissionCategory,
}

/// Role definition held by the registry
#[derive(Debug, Clone)]
pub struct RoleInfo {
    /// Role identifier
    pub role: RoleId,
    /// Display name shown to operators
    pub name: String,
    /// What the role is for
    pub description: String,
    /// Authority level (higher outranks lower)
    pub level: u8,
    /// Permissions currently granted to the role
    pub permissions: HashSet<Permission>,
}

impl RoleInfo {
    /// Whether this role currently grants the permission
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Granted permissions in catalog order
    pub fn sorted_permissions(&self) -> Vec<Permission> {
        let mut permissions: Vec<Permission> = self.permissions.iter().copied().collect();
        permissions.sort();
        permissions
    }
}

/// Permission check result
#[derive(Debug, Clone, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role the decision was made for
    pub role: RoleId,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

/// Answer to a user asking about one of their own permissions
#[derive(Debug, Clone, Serialize)]
pub struct UserPermissionCheck {
    /// Account the check ran for
    pub user_id: Uuid,
    /// Permission that was checked
    pub permission: Permission,
    /// Whether the account holds it
    pub has_permission: bool,
    /// Role the account resolved to
    pub role: RoleId,
    /// Reason for denial (if not granted)
    pub reason: Option<String>,
}

/// A role and its current permission set, as reported to administrators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermissions {
    /// Role identifier
    pub role: RoleId,
    /// Display name
    pub name: String,
    /// Role description
    pub description: String,
    /// Authority level
    pub level: u8,
    /// Granted permissions in catalog order
    pub permissions: Vec<Permission>,
    /// Number of granted permissions
    pub permission_count: usize,
}

impl From<RoleInfo> for RolePermissions {
    fn from(info: RoleInfo) -> Self {
        let permissions = info.sorted_permissions();
        Self {
            role: info.role,
            name: info.name,
            description: info.description,
            level: info.level,
            permission_count: permissions.len(),
            permissions,
        }
    }
}

/// Role metadata without the permission list
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    /// Role identifier
    pub role: RoleId,
    /// Display name
    pub name: String,
    /// Role description
    pub description: String,
    /// Authority level
    pub level: u8,
}

impl From<RoleInfo> for RoleSummary {
    fn from(info: RoleInfo) -> Self {
        Self {
            role: info.role,
            name: info.name,
            description: info.description,
            level: info.level,
        }
    }
}

/// Full role-to-permission mapping for the administration console
#[derive(Debug, Clone, Serialize)]
pub struct PermissionMatrix {
    /// All roles, highest authority level first
    pub roles: Vec<RoleSummary>,
    /// The complete permission catalog
    pub permissions: Vec<PermissionDescriptor>,
    /// Granted permissions per role, in catalog order
    pub matrix: BTreeMap<RoleId, Vec<Permission>>,
}
