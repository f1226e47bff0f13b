//! Fixed permission catalog and built-in role definitions

use std::collections::HashSet;

use super::types::{Permission, PermissionCategory, PermissionDescriptor, RoleId, RoleInfo};

/// The complete permission catalog, in catalog-id order
pub const PERMISSION_CATALOG: [PermissionDescriptor; 32] = [
    PermissionDescriptor {
        id: 1,
        permission: Permission::ProjectCreate,
        description: "Create projects",
        category: PermissionCategory::Project,
    },
    PermissionDescriptor {
        id: 2,
        permission: Permission::ProjectRead,
        description: "View projects",
        category: PermissionCategory::Project,
    },
    PermissionDescriptor {
        id: 3,
        permission: Permission::ProjectUpdate,
        description: "Update projects",
        category: PermissionCategory::Project,
    },
    PermissionDescriptor {
        id: 4,
        permission: Permission::ProjectDelete,
        description: "Delete projects",
        category: PermissionCategory::Project,
    },
    PermissionDescriptor {
        id: 5,
        permission: Permission::ProjectStatusUpdate,
        description: "Update project status",
        category: PermissionCategory::Project,
    },
    PermissionDescriptor {
        id: 6,
        permission: Permission::ClientCreate,
        description: "Create clients",
        category: PermissionCategory::Client,
    },
    PermissionDescriptor {
        id: 7,
        permission: Permission::ClientRead,
        description: "View clients",
        category: PermissionCategory::Client,
    },
    PermissionDescriptor {
        id: 8,
        permission: Permission::ClientUpdate,
        description: "Update clients",
        category: PermissionCategory::Client,
    },
    PermissionDescriptor {
        id: 9,
        permission: Permission::ClientDelete,
        description: "Delete clients",
        category: PermissionCategory::Client,
    },
    PermissionDescriptor {
        id: 10,
        permission: Permission::ClientExport,
        description: "Export client data",
        category: PermissionCategory::Client,
    },
    PermissionDescriptor {
        id: 11,
        permission: Permission::TeamCreate,
        description: "Add team members",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 12,
        permission: Permission::TeamRead,
        description: "View team information",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 13,
        permission: Permission::TeamUpdate,
        description: "Update team information",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 14,
        permission: Permission::TeamDelete,
        description: "Remove team members",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 15,
        permission: Permission::TeamSalaryView,
        description: "View salary information",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 16,
        permission: Permission::TeamSalaryManage,
        description: "Manage salary payments",
        category: PermissionCategory::Team,
    },
    PermissionDescriptor {
        id: 17,
        permission: Permission::FinanceRead,
        description: "View financial information",
        category: PermissionCategory::Finance,
    },
    PermissionDescriptor {
        id: 18,
        permission: Permission::FinanceUpdate,
        description: "Update financial information",
        category: PermissionCategory::Finance,
    },
    PermissionDescriptor {
        id: 19,
        permission: Permission::FinanceExport,
        description: "Export financial reports",
        category: PermissionCategory::Finance,
    },
    PermissionDescriptor {
        id: 20,
        permission: Permission::FinanceCostManage,
        description: "Manage cost structures",
        category: PermissionCategory::Finance,
    },
    PermissionDescriptor {
        id: 21,
        permission: Permission::SettingsRead,
        description: "View system settings",
        category: PermissionCategory::Settings,
    },
    PermissionDescriptor {
        id: 22,
        permission: Permission::SettingsUpdate,
        description: "Update system settings",
        category: PermissionCategory::Settings,
    },
    PermissionDescriptor {
        id: 23,
        permission: Permission::SettingsExchangeRate,
        description: "Manage exchange rates",
        category: PermissionCategory::Settings,
    },
    PermissionDescriptor {
        id: 24,
        permission: Permission::FileUpload,
        description: "Upload files",
        category: PermissionCategory::File,
    },
    PermissionDescriptor {
        id: 25,
        permission: Permission::FileDownload,
        description: "Download files",
        category: PermissionCategory::File,
    },
    PermissionDescriptor {
        id: 26,
        permission: Permission::FileDelete,
        description: "Delete files",
        category: PermissionCategory::File,
    },
    PermissionDescriptor {
        id: 27,
        permission: Permission::FileGeneratePdf,
        description: "Generate PDF documents",
        category: PermissionCategory::File,
    },
    PermissionDescriptor {
        id: 28,
        permission: Permission::NotificationSend,
        description: "Send notifications",
        category: PermissionCategory::Notification,
    },
    PermissionDescriptor {
        id: 29,
        permission: Permission::NotificationManage,
        description: "Manage notifications",
        category: PermissionCategory::Notification,
    },
    PermissionDescriptor {
        id: 30,
        permission: Permission::UserManage,
        description: "Manage user accounts",
        category: PermissionCategory::System,
    },
    PermissionDescriptor {
        id: 31,
        permission: Permission::RoleManage,
        description: "Manage role permissions",
        category: PermissionCategory::System,
    },
    PermissionDescriptor {
        id: 32,
        permission: Permission::SystemAdmin,
        description: "Full system administration",
        category: PermissionCategory::System,
    },
];

/// Look up the catalog entry for a permission
///
/// Catalog rows are declared in the same order as `Permission` variants, so
/// the discriminant indexes straight into the table.
pub fn descriptor(permission: Permission) -> &'static PermissionDescriptor {
    &PERMISSION_CATALOG[permission as usize]
}

/// Built-in definition for a role, including its default permission set
pub(super) fn default_role_info(role: RoleId) -> RoleInfo {
    match role {
        RoleId::Admin => RoleInfo {
            role,
            name: "System Administrator".to_string(),
            description: "Holds every permission and manages users, roles, and system settings"
                .to_string(),
            level: 100,
            permissions: Permission::ALL.iter().copied().collect(),
        },
        RoleId::Manager => RoleInfo {
            role,
            name: "Project Manager".to_string(),
            description: "Runs projects, client relationships, and team coordination".to_string(),
            level: 80,
            permissions: permission_set(&[
                Permission::ProjectCreate,
                Permission::ProjectRead,
                Permission::ProjectUpdate,
                Permission::ProjectStatusUpdate,
                Permission::ClientCreate,
                Permission::ClientRead,
                Permission::ClientUpdate,
                Permission::TeamRead,
                Permission::TeamUpdate,
                Permission::FinanceRead,
                Permission::FileUpload,
                Permission::FileDownload,
                Permission::NotificationSend,
            ]),
        },
        RoleId::Designer => RoleInfo {
            role,
            name: "Designer".to_string(),
            description: "Handles project design and modeling work".to_string(),
            level: 60,
            permissions: permission_set(&[
                Permission::ProjectRead,
                Permission::ProjectUpdate,
                Permission::ClientRead,
                Permission::TeamRead,
                Permission::FileUpload,
                Permission::FileDownload,
                Permission::FileGeneratePdf,
            ]),
        },
        RoleId::Renderer => RoleInfo {
            role,
            name: "Rendering Artist".to_string(),
            description: "Handles project rendering and post-production".to_string(),
            level: 60,
            permissions: permission_set(&[
                Permission::ProjectRead,
                Permission::ProjectUpdate,
                Permission::ClientRead,
                Permission::TeamRead,
                Permission::FileUpload,
                Permission::FileDownload,
                Permission::FileGeneratePdf,
            ]),
        },
        RoleId::Sales => RoleInfo {
            role,
            name: "Sales Representative".to_string(),
            description: "Handles client acquisition and project sales".to_string(),
            level: 50,
            permissions: permission_set(&[
                Permission::ProjectRead,
                Permission::ProjectCreate,
                Permission::ClientCreate,
                Permission::ClientRead,
                Permission::ClientUpdate,
                Permission::FinanceRead,
                Permission::FileDownload,
            ]),
        },
        RoleId::Viewer => RoleInfo {
            role,
            name: "Viewer".to_string(),
            description: "Read-only access to basic information".to_string(),
            level: 10,
            permissions: permission_set(&[
                Permission::ProjectRead,
                Permission::ClientRead,
                Permission::TeamRead,
                Permission::FileDownload,
            ]),
        },
    }
}

fn permission_set(permissions: &[Permission]) -> HashSet<Permission> {
    permissions.iter().copied().collect()
}
