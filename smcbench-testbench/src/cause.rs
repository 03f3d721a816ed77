//! EMM cause values carried by Attach Reject
//!
//! 3GPP TS 24.301 Section 9.9.3.9. Only used to render the reject reason, so
//! unknown values are not an error.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Label for cause values that are not an [`EmmCause`]
pub const UNKNOWN_CAUSE: &str = "error";

/// EMM cause (3GPP TS 24.301 Section 9.9.3.9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum EmmCause {
    /// IMSI unknown in HSS
    ImsiUnknownInHss = 0x02,
    /// Illegal UE
    IllegalUe = 0x03,
    /// IMEI not accepted
    ImeiNotAccepted = 0x05,
    /// Illegal ME
    IllegalMe = 0x06,
    /// EPS services not allowed
    EpsServicesNotAllowed = 0x07,
    /// EPS services and non-EPS services not allowed
    EpsAndNonEpsServicesNotAllowed = 0x08,
    /// UE identity cannot be derived by the network
    UeIdentityCannotBeDerived = 0x09,
    /// Implicitly detached
    ImplicitlyDetached = 0x0A,
    /// PLMN not allowed
    PlmnNotAllowed = 0x0B,
    /// Tracking area not allowed
    TaNotAllowed = 0x0C,
    /// Roaming not allowed in this tracking area
    RoamingNotAllowedInTa = 0x0D,
    /// EPS services not allowed in this PLMN
    EpsServicesNotAllowedInPlmn = 0x0E,
    /// No suitable cells in tracking area
    NoSuitableCellsInTa = 0x0F,
    /// MSC temporarily not reachable
    MscTemporarilyNotReachable = 0x10,
    /// Network failure
    NetworkFailure = 0x11,
    /// CS domain not available
    CsDomainNotAvailable = 0x12,
    /// ESM failure
    EsmFailure = 0x13,
    /// MAC failure
    MacFailure = 0x14,
    /// Synch failure
    SynchFailure = 0x15,
    /// Congestion
    Congestion = 0x16,
    /// UE security capabilities mismatch
    UeSecurityCapMismatch = 0x17,
    /// Security mode rejected, unspecified
    SecModeRejectedUnspecified = 0x18,
    /// Not authorized for this CSG
    NotAuthorizedForCsg = 0x19,
    /// Non-EPS authentication unacceptable
    NonEpsAuthenticationUnacceptable = 0x1A,
    /// CS service temporarily not available
    CsServiceTemporarilyNotAvailable = 0x27,
    /// No EPS bearer context activated
    NoEpsBearerContextActivated = 0x28,
    /// Semantically incorrect message
    SemanticallyIncorrectMessage = 0x5F,
    /// Invalid mandatory information
    InvalidMandatoryInformation = 0x60,
    /// Message type non-existent or not implemented
    MessageTypeNonExistent = 0x61,
    /// Message type not compatible with the protocol state
    MessageTypeNotCompatible = 0x62,
    /// Information element non-existent or not implemented
    IeNonExistent = 0x63,
    /// Conditional IE error
    ConditionalIeError = 0x64,
    /// Message not compatible with the protocol state
    MessageNotCompatible = 0x65,
    /// Protocol error, unspecified
    ProtocolErrorUnspecified = 0x6F,
}

impl EmmCause {
    /// Mnemonic printed in logs and summaries
    pub fn mnemonic(&self) -> &'static str {
        match self {
            EmmCause::ImsiUnknownInHss => "MME_EMM_CAUSE_IMSI_UNKNOWN_IN_HSS",
            EmmCause::IllegalUe => "MME_EMM_CAUSE_ILLEGAL_UE",
            EmmCause::ImeiNotAccepted => "MME_EMM_CAUSE_IMEI_NOT_ACCEPTED",
            EmmCause::IllegalMe => "MME_EMM_CAUSE_ILLEGAL_ME",
            EmmCause::EpsServicesNotAllowed => "MME_EMM_CAUSE_EPS_SERVICES_NOT_ALLOWED",
            EmmCause::EpsAndNonEpsServicesNotAllowed => {
                "MME_EMM_CAUSE_EPS_SERVICES_AND_NON_EPS_SERVICES_NOT_ALLOWED"
            }
            EmmCause::UeIdentityCannotBeDerived => {
                "MME_EMM_CAUSE_UE_IDENTITY_CANNOT_BE_DERIVED_BY_THE_NETWORK"
            }
            EmmCause::ImplicitlyDetached => "MME_EMM_CAUSE_IMPLICITLY_DETACHED",
            EmmCause::PlmnNotAllowed => "MME_EMM_CAUSE_PLMN_NOT_ALLOWED",
            EmmCause::TaNotAllowed => "MME_EMM_CAUSE_TRACKING_AREA_NOT_ALLOWED",
            EmmCause::RoamingNotAllowedInTa => {
                "MME_EMM_CAUSE_ROAMING_NOT_ALLOWED_IN_THIS_TRACKING_AREA"
            }
            EmmCause::EpsServicesNotAllowedInPlmn => {
                "MME_EMM_CAUSE_EPS_SERVICES_NOT_ALLOWED_IN_THIS_PLMN"
            }
            EmmCause::NoSuitableCellsInTa => "MME_EMM_CAUSE_NO_SUITABLE_CELLS_IN_TRACKING_AREA",
            EmmCause::MscTemporarilyNotReachable => "MME_EMM_CAUSE_MSC_TEMPORARILY_NOT_REACHABLE",
            EmmCause::NetworkFailure => "MME_EMM_CAUSE_NETWORK_FAILURE",
            EmmCause::CsDomainNotAvailable => "MME_EMM_CAUSE_CS_DOMAIN_NOT_AVAILABLE",
            EmmCause::EsmFailure => "MME_EMM_CAUSE_ESM_FAILURE",
            EmmCause::MacFailure => "MME_EMM_CAUSE_MAC_FAILURE",
            EmmCause::SynchFailure => "MME_EMM_CAUSE_SYNCH_FAILURE",
            EmmCause::Congestion => "MME_EMM_CAUSE_CONGESTION",
            EmmCause::UeSecurityCapMismatch => "MME_EMM_CAUSE_UE_SECURITY_CAPABILITIES_MISMATCH",
            EmmCause::SecModeRejectedUnspecified => {
                "MME_EMM_CAUSE_SECURITY_MODE_REJECTED_UNSPECIFIED"
            }
            EmmCause::NotAuthorizedForCsg => "MME_EMM_CAUSE_NOT_AUTHORIZED_FOR_THIS_CSG",
            EmmCause::NonEpsAuthenticationUnacceptable => {
                "MME_EMM_CAUSE_NON_EPS_AUTHENTICATION_UNACCEPTABLE"
            }
            EmmCause::CsServiceTemporarilyNotAvailable => {
                "MME_EMM_CAUSE_CS_SERVICE_TEMPORARILY_NOT_AVAILABLE"
            }
            EmmCause::NoEpsBearerContextActivated => {
                "MME_EMM_CAUSE_NO_EPS_BEARER_CONTEXT_ACTIVATED"
            }
            EmmCause::SemanticallyIncorrectMessage => {
                "MME_EMM_CAUSE_SEMANTICALLY_INCORRECT_MESSAGE"
            }
            EmmCause::InvalidMandatoryInformation => "MME_EMM_CAUSE_INVALID_MANDATORY_INFORMATION",
            EmmCause::MessageTypeNonExistent => {
                "MME_EMM_CAUSE_MESSAGE_TYPE_NON_EXISTENT_OR_NOT_IMPLEMENTED"
            }
            EmmCause::MessageTypeNotCompatible => {
                "MME_EMM_CAUSE_MESSAGE_TYPE_NOT_COMPATIBLE_WITH_THE_PROTOCOL_STATE"
            }
            EmmCause::IeNonExistent => {
                "MME_EMM_CAUSE_INFORMATION_ELEMENT_NON_EXISTENT_OR_NOT_IMPLEMENTED"
            }
            EmmCause::ConditionalIeError => "MME_EMM_CAUSE_CONDITIONAL_IE_ERROR",
            EmmCause::MessageNotCompatible => {
                "MME_EMM_CAUSE_MESSAGE_NOT_COMPATIBLE_WITH_THE_PROTOCOL_STATE"
            }
            EmmCause::ProtocolErrorUnspecified => "MME_EMM_CAUSE_PROTOCOL_ERROR_UNSPECIFIED",
        }
    }
}

/// Returns the mnemonic for a raw EMM cause, or [`UNKNOWN_CAUSE`].
pub fn cause_str(cause: u8) -> &'static str {
    EmmCause::try_from_primitive(cause)
        .map(|cause| cause.mnemonic())
        .unwrap_or(UNKNOWN_CAUSE)
}
