// src/shared/constants.rs
//! Message catalog and list defaults shared by every module.

pub const DEFAULT_SORT_FIELD: &str = "createdAt";
pub const DEFAULT_PAGE_NO: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;
pub const PAGINATE_TRUE: &str = "true";

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 32;
pub const MIN_PHONE_LENGTH: usize = 5;
pub const MAX_PHONE_LENGTH: usize = 10;
pub const MIN_PINCODE_DIGITS: usize = 4;
pub const MAX_PINCODE_DIGITS: usize = 6;

/// Status rows seeded by the migrations.
pub mod status_names {
    pub const INACTIVE: &str = "Inactive";
    pub const ACTIVE: &str = "Active";
    pub const DELETED: &str = "Deleted";
}

/// Role rows seeded by the migrations.
pub mod role_names {
    pub const SUPER_ADMIN: &str = "Super Admin";
}

pub mod messages {
    pub const USER_CREATED: &str = "User created successfully";
    pub const USER_UPDATED: &str = "User updated successfully";
    pub const USER_DELETED: &str = "User deleted successfully";
    pub const PASSWORD_UPDATED: &str = "Password updated successfully";
    pub const SUCCESSFUL_AUTHENTICATION: &str = "User authenticated successfully";
    pub const PASSWORD_RESET_LINK_SENT: &str = "Password reset link sent successfully";

    pub const ROLE_CREATED: &str = "Role created successfully";
    pub const ROLE_UPDATED: &str = "Role updated successfully";
    pub const ROLE_DELETED: &str = "Role deleted successfully";

    pub const CLASSROOM_CREATED: &str = "Classroom created successfully";
    pub const CLASSROOM_UPDATED: &str = "Classroom updated successfully";
    pub const CLASSROOM_DELETED: &str = "Classroom deleted successfully";

    pub const LOCATION_CREATED: &str = "Location created successfully";
    pub const LOCATION_UPDATED: &str = "Location updated successfully";
    pub const LOCATION_DELETED: &str = "Location deleted successfully";

    pub const ACCESSORY_CREATED: &str = "Accessory created successfully";
    pub const ACCESSORY_UPDATED: &str = "Accessory updated successfully";
    pub const ACCESSORY_DELETED: &str = "Accessory deleted successfully";

    pub const STATUS_CREATED: &str = "Status created successfully";

    pub const CORPORATE_CREATED: &str = "Corporate created successfully";
    pub const CORPORATE_UPDATED: &str = "Corporate updated successfully";
    pub const CORPORATE_DELETED: &str = "Corporate deleted successfully";
}

pub mod errors {
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const INACTIVE_USER: &str = "Inactive user";
    pub const EMAIL_EMPTY: &str = "Email cannot be empty";
    pub const EMAIL_ALREADY_EXIST: &str = "Email already exists";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    pub const ERROR_IN_AUTH_VALIDATION: &str = "Error in validating user credentials";
    pub const ERROR_IN_USER_CREATE: &str = "Error in create user action";
    pub const ERROR_IN_PASSWORD_SETUP: &str = "Error in setting up user password";
    pub const PASSWORD_EMPTY: &str = "Password cannot be empty";
    pub const NO_PASSCODE_FOUND_FOR_USER: &str = "No activation code found for the user";
    pub const ACTIVATION_CODE_EMPTY: &str = "User activation code cannot be empty";
    pub const ERROR_IN_FETCHING_USER_LIST: &str = "Error while retrieving the users list";
    pub const ERROR_IN_UPDATING_USER_DETAIL: &str = "Error while updating user detail";
    pub const ERROR_IN_DELETING_USER_DETAIL: &str = "Error in deleting user detail";
    pub const ERROR_IN_FETCHING_USER_DETAIL: &str = "Error while retrieving the user detail";
    pub const ERROR_IN_SENDING_EMAIL: &str = "Error in sending user activation code through email";
    pub const INVALID_AUTHENTICATION_HEADER: &str =
        "Invalid authentication header value found in the request";
    pub const AUTHENTICATION_HEADER_REQUIRED: &str =
        "Required authentication header value not found in the request";
    pub const AUTHENTICATION_FAILED_PREFIX: &str = "Authentication failed";

    pub const NAME_ALREADY_EXISTS: &str = "Name already exists";
    pub const NAME_EMPTY: &str = "Name cannot be empty";
    pub const ID_EMPTY: &str = "Id cannot be empty";
    pub const ERROR_IN_FETCHING_RECORDS: &str = "Error in fetching records";
    pub const INVALID_SORT_FIELD: &str = "Invalid sort field";
    pub const SERVER_ERROR: &str = "Server error";

    pub const ROLE_NOT_FOUND: &str = "Role not found";
    pub const ERROR_IN_FETCHING_ROLE: &str = "Error while retrieving the role";
    pub const ERROR_IN_UPDATE_ROLE: &str = "Error during role update operation";
    pub const ERROR_IN_DELETE_ROLE: &str = "Error during role delete operation";
    pub const ERROR_IN_ROLE_CREATION: &str = "Error during role creation";

    pub const CLASSROOM_NOT_FOUND: &str = "Classroom not found";
    pub const ERROR_IN_CLASSROOM_CREATION: &str = "Error in classroom creation";
    pub const ERROR_IN_FETCHING_CLASSROOM: &str = "Error in fetching classroom";
    pub const ERROR_IN_CLASSROOM_DELETE: &str = "Error in deleting classroom";
    pub const ERROR_IN_CLASSROOM_UPDATE: &str = "Error in updating classroom";

    pub const LOCATION_NOT_FOUND: &str = "Location not found";
    pub const ERROR_IN_LOCATION_CREATION: &str = "Error in location creation";
    pub const ERROR_IN_FETCHING_LOCATION: &str = "Error in fetching location detail";
    pub const ERROR_IN_UPDATE_LOCATION: &str = "Error in updating location detail";
    pub const ERROR_IN_DELETE_LOCATION: &str = "Error in deleting location detail";

    pub const ACCESSORY_NOT_FOUND: &str = "Accessories not found";
    pub const ERROR_IN_ACCESSORY_CREATION: &str = "Error in accessory creation";
    pub const ERROR_IN_FETCHING_ACCESSORY: &str = "Error in fetching accessory details";
    pub const ERROR_IN_UPDATE_ACCESSORY: &str = "Error in updating accessory detail";
    pub const ERROR_IN_DELETE_ACCESSORY: &str = "Error in deleting accessory detail";

    pub const STATUS_NOT_FOUND: &str = "Status not found";
    pub const ERROR_IN_STATUS_CREATION: &str = "Error in status creation";
    pub const ERROR_IN_FETCHING_STATUS: &str = "Error in fetching status list";

    pub const CORPORATE_NOT_FOUND: &str = "Corporate not found";
    pub const ERROR_IN_CORPORATE_CREATION: &str = "Error in corporate creation";
    pub const ERROR_IN_FETCHING_CORPORATE: &str = "Error in fetching corporate details";
    pub const ERROR_IN_UPDATE_CORPORATE: &str = "Error in updating corporate detail";
    pub const ERROR_IN_DELETE_CORPORATE: &str = "Error in deleting corporate detail";

    pub const NAME_LENGTH: &str = "Name must be between 3 and 32 characters";
    pub const FIRST_NAME_LENGTH: &str = "First name must be between 3 and 32 characters";
    pub const PHONE_NUMBER_NUMERIC: &str = "Phone number must contain only numeric characters";
    pub const PHONE_NUMBER_LENGTH: &str = "Phone number must be between 5 and 10 characters";
    pub const INVALID_PINCODE: &str = "Pincode must be between 4 and 6 digits";
    pub const INVALID_EMAIL_ADDRESS: &str = "Invalid email address";
}
