//! Static reference text for the government services the assistant covers.

use std::str::FromStr;

pub const UNKNOWN_SERVICE_MESSAGE: &str = "Service information not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Passport,
    PropertyTax,
    DrivingLicense,
    BirthCertificate,
    VoterId,
    GeneralInquiry,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        Self::Passport,
        Self::PropertyTax,
        Self::DrivingLicense,
        Self::BirthCertificate,
        Self::VoterId,
        Self::GeneralInquiry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passport => "Passport Services",
            Self::PropertyTax => "Property Tax",
            Self::DrivingLicense => "Driving License",
            Self::BirthCertificate => "Birth Certificate",
            Self::VoterId => "Voter ID",
            Self::GeneralInquiry => "General Inquiry",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::PropertyTax => "property-tax",
            Self::DrivingLicense => "driving-license",
            Self::BirthCertificate => "birth-certificate",
            Self::VoterId => "voter-id",
            Self::GeneralInquiry => "general",
        }
    }

    pub fn info(&self) -> &'static str {
        match self {
            Self::Passport => PASSPORT,
            Self::PropertyTax => PROPERTY_TAX,
            Self::DrivingLicense => DRIVING_LICENSE,
            Self::BirthCertificate => BIRTH_CERTIFICATE,
            Self::VoterId => VOTER_ID,
            Self::GeneralInquiry => GENERAL_INQUIRY,
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    /// Accepts either the display label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(wanted)
                    || kind.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown service: {wanted}"))
    }
}

/// Reference text for `name`, or [`UNKNOWN_SERVICE_MESSAGE`].
pub fn service_info(name: &str) -> &'static str {
    name.parse::<ServiceKind>()
        .map(|kind| kind.info())
        .unwrap_or(UNKNOWN_SERVICE_MESSAGE)
}

const PASSPORT: &str = "\
**🛂 Passport Services**

**How to Apply:**
1. Visit passportindia.gov.in
2. Create an account and fill the application form
3. Upload required documents
4. Pay the fee online
5. Schedule appointment at Passport Seva Kendra

**Required Documents:**
- Proof of Identity (Aadhaar, PAN, Voter ID)
- Proof of Address (Utility bill, Bank statement)
- Date of Birth proof
- Recent passport-sized photographs

**Fees:**
- Normal: ₹1500 (36 pages), ₹2000 (60 pages)
- Tatkal: ₹2000 (36 pages), ₹2500 (60 pages)

**Processing Time:**
- Normal: 2-3 weeks
- Tatkal: 1-3 days

**Contact:** 1800-258-1800
";

const PROPERTY_TAX: &str = "\
**🏠 Property Tax Payment**

**Online Payment Methods:**
1. Municipal Corporation Website
2. State Government e-Services Portal
3. Mobile Apps (PayTM, PhonePe, Google Pay)
4. Banking Apps

**Required Information:**
- Property ID/Assessment Number
- Owner's Name
- Property Address

**Payment Options:**
- Credit/Debit Card
- Net Banking
- UPI
- Wallet

**Due Dates:** Check local municipal rules
**Penalty:** 1-2% per month for late payment

**Contact:** Local Municipal Office
";

const DRIVING_LICENSE: &str = "\
**🚗 Driving License Services**

**Types of Licenses:**
- Learner's License (Required before permanent)
- Permanent License (Valid for 20 years)
- International Driving Permit

**Application Process:**
1. Apply online at parivahan.gov.in
2. Book slot for driving test
3. Pass written and practical tests
4. Medical examination
5. Collect license

**Documents Required:**
- Aadhaar Card
- Proof of Address
- Age Proof
- Medical Certificate
- Learner's License (for permanent)

**Fees:**
- Learner's License: ₹200
- Permanent License: ₹500
- International Permit: ₹500

**Contact:** 1800-11-0909
";

const BIRTH_CERTIFICATE: &str = "\
**📄 Birth Certificate Services**

**Registration Process:**
- Hospital births: Registered within 21 days by hospital
- Home births: Register at local municipal office within 21 days
- Late registration: Up to 30 days (with penalty)

**Required Documents:**
- Hospital discharge certificate
- Parents' ID proof (Aadhaar, Voter ID)
- Address proof
- Affidavit (if required)

**Fees:**
- Normal registration: Free
- Late registration: ₹200-500
- Duplicate certificate: ₹100-200

**Processing Time:** 7-15 days

**Contact:** Local Municipal Office
";

const VOTER_ID: &str = "\
**🗳️ Voter ID Services**

**How to Apply:**
1. Visit nvsp.in (National Voter's Service Portal)
2. Create account with mobile number
3. Fill online application form
4. Upload documents
5. Submit and track application

**Documents Required:**
- Proof of Identity (Aadhaar, PAN, Passport)
- Proof of Address
- Date of Birth proof
- Recent photograph

**Application Types:**
- New Voter Registration
- Correction in existing details
- Deletion from rolls
- Transference to another constituency

**Processing Time:** 15-30 days

**Contact:** 1950 (Election Commission Helpline)
";

const GENERAL_INQUIRY: &str = "\
**📋 General Government Services**

**Common Services Available:**
- PAN Card Application
- Aadhaar Card Services
- Ration Card
- Electricity Bill Payment
- Water Supply Services
- Municipal Complaints
- Public Grievance Redressal

**Online Portals:**
- India.gov.in (Central Government)
- State Government Portals
- Department-specific websites
- Mobile Apps

**Emergency Contacts:**
- Police: 100
- Fire: 101
- Ambulance: 102
- Women Helpline: 1091

**For specific services, please ask a detailed question!**
";
