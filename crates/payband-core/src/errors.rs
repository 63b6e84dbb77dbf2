use thiserror::Error;

/// Result type alias using PaybandError
pub type Result<T> = std::result::Result<T, PaybandError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A stable classification of every error the workspace can produce. Each
/// kind maps to a stable code used by log events and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Manager
    Duplicate,
    NotFound,
    InvalidSalary,

    // Model
    InvalidPosition,

    // Input
    InvalidInput,
    Serialization,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Duplicate => "ERR_DUPLICATE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidSalary => "ERR_INVALID_SALARY",
            ExErrorKind::InvalidPosition => "ERR_INVALID_POSITION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus context, for programmatic handling at the
/// presentation boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    employee_id: Option<String>,
    position_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            employee_id: None,
            position_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add employee ID context
    pub fn with_employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = Some(id.into());
        self
    }

    /// Add position ID context
    pub fn with_position_id(mut self, id: impl Into<String>) -> Self {
        self.position_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn position_id(&self) -> Option<&str> {
        self.position_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(employee_id) = &self.employee_id {
            write!(f, " (employee_id: {})", employee_id)?;
        }
        if let Some(position_id) = &self.position_id {
            write!(f, " (position_id: {})", position_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Payband operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaybandError {
    /// An employee with the same identifier is already managed
    #[error("Employee already exists: {employee_id}")]
    DuplicateEmployee { employee_id: String },

    /// No managed employee has this identifier
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    /// Salary falls outside the applicable band (beyond tolerance where one applies)
    #[error(
        "Invalid salary {salary} for employee {employee_id}: position {position_id} allows [{min_salary}, {max_salary}]"
    )]
    InvalidSalary {
        employee_id: String,
        position_id: String,
        salary: f64,
        min_salary: f64,
        max_salary: f64,
    },

    /// Position band is malformed
    #[error("Invalid position {position_id}: {reason}")]
    InvalidPosition { position_id: String, reason: String },

    /// A change inside a batch failed; nothing in the batch was applied
    #[error("Change #{index} rejected: {source}")]
    ChangeRejected {
        index: usize,
        #[source]
        source: Box<PaybandError>,
    },
}

impl PaybandError {
    /// The innermost error, unwrapping batch context
    pub fn root(&self) -> &PaybandError {
        match self {
            PaybandError::ChangeRejected { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Conversion from PaybandError to ExError
impl From<PaybandError> for ExError {
    fn from(err: PaybandError) -> Self {
        match err {
            PaybandError::DuplicateEmployee { employee_id } => {
                ExError::new(ExErrorKind::Duplicate)
                    .with_employee_id(employee_id)
                    .with_message("Employee already managed")
            }

            PaybandError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_employee_id(employee_id)
                .with_message("Employee not managed"),

            PaybandError::InvalidSalary {
                employee_id,
                position_id,
                salary,
                min_salary,
                max_salary,
            } => ExError::new(ExErrorKind::InvalidSalary)
                .with_employee_id(employee_id)
                .with_position_id(position_id)
                .with_message(format!(
                    "Salary {} outside band [{}, {}]",
                    salary, min_salary, max_salary
                )),

            PaybandError::InvalidPosition {
                position_id,
                reason,
            } => ExError::new(ExErrorKind::InvalidPosition)
                .with_position_id(position_id)
                .with_message(reason),

            PaybandError::ChangeRejected { index, source } => {
                let inner: ExError = (*source).into();
                let message = format!("change #{}: {}", index, inner.message());
                ExError {
                    message,
                    ..inner
                }
            }
        }
    }
}
