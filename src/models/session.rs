// ============================================================================
// SESSION - Fases de la sesión y rutas de la aplicación
// ============================================================================

/// Fase de la sesión por pestaña.
/// Anonymous -> AuthenticatedUnverified (credenciales) ->
/// AuthenticatedVerified (PIN). Logout o 401 vuelven a Anonymous.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    Anonymous,
    AuthenticatedUnverified,
    AuthenticatedVerified,
}

/// Pestañas del dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminTab {
    Users,
    Agents,
    Surveys,
    Transfers,
    Redemptions,
    FraudRules,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 7] = [
        AdminTab::Users,
        AdminTab::Agents,
        AdminTab::Surveys,
        AdminTab::Transfers,
        AdminTab::Redemptions,
        AdminTab::FraudRules,
        AdminTab::Settings,
    ];

    /// Identificador usado en data-tab
    pub fn slug(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Agents => "agents",
            AdminTab::Surveys => "surveys",
            AdminTab::Transfers => "transfers",
            AdminTab::Redemptions => "redemptions",
            AdminTab::FraudRules => "fraud-rules",
            AdminTab::Settings => "settings",
        }
    }

    pub fn from_slug(slug: &str) -> Option<AdminTab> {
        AdminTab::ALL.iter().copied().find(|tab| tab.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Users => "Usuarios",
            AdminTab::Agents => "Agentes",
            AdminTab::Surveys => "Encuestas",
            AdminTab::Transfers => "Transferencias",
            AdminTab::Redemptions => "Canjes",
            AdminTab::FraudRules => "Reglas antifraude",
            AdminTab::Settings => "Configuración",
        }
    }
}

/// Rutas navegables. Dashboard es la zona protegida.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    PinVerify,
    Dashboard(AdminTab),
}

impl Route {
    /// Ruta protegida por defecto tras verificar el PIN
    pub fn default_protected() -> Route {
        Route::Dashboard(AdminTab::Users)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard(_))
    }
}

/// Decisión del route guard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}
