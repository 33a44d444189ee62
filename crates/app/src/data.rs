//! Seeded demo datasets. Everything is static so the whole app works
//! offline; the admissions pipeline is deliberately longer than one page.

use shared_types::academics::{
    ExamResult, ExamSchedule, LearningResource, LessonPlan, TimetableSlot, WorkStatus,
};
use shared_types::admission::{Admission, AdmissionStatus};
use shared_types::facilities::{BookLoan, Message, RoomAllocation, TransportRoute};
use shared_types::fees::{Defaulter, FeeRecord, PayStatus, Transaction};
use shared_types::governance::{Approval, ApprovalStatus, Certificate, Report};
use shared_types::insight::{AiInsight, Capability, ChatMessage, InsightPriority};
use shared_types::student::{AttendanceStatus, ClassGroup, RosterEntry, Student};

macro_rules! admission {
    ($id:expr, $student:expr, $parent:expr, $class:expr, $date:expr, $status:expr, $phone:expr, $email:expr) => {
        Admission {
            id: $id,
            student_name: $student,
            parent_name: $parent,
            class: $class,
            submitted: $date,
            status: $status,
            phone: $phone,
            email: $email,
        }
    };
}

pub static ADMISSIONS: &[Admission] = &[
    admission!("ADM-2024-001", "Aarav Sharma", "Vikram Sharma", "Class 6", "2024-11-02", AdmissionStatus::Pending, "+91 98100 11001", "vikram.sharma@gmail.com"),
    admission!("ADM-2024-002", "Diya Patel", "Nilesh Patel", "Class 4", "2024-11-03", AdmissionStatus::Approved, "+91 98100 11002", "nilesh.patel@gmail.com"),
    admission!("ADM-2024-003", "Arjun Reddy", "Srinivas Reddy", "Class 8", "2024-11-03", AdmissionStatus::Pending, "+91 98100 11003", "srini.reddy@gmail.com"),
    admission!("ADM-2024-004", "Ananya Iyer", "Ramesh Iyer", "Class 1", "2024-11-04", AdmissionStatus::Waitlisted, "+91 98100 11004", "ramesh.iyer@gmail.com"),
    admission!("ADM-2024-005", "Vihaan Gupta", "Amit Gupta", "Class 5", "2024-11-05", AdmissionStatus::Approved, "+91 98100 11005", "amit.gupta@gmail.com"),
    admission!("ADM-2024-006", "Ishita Singh", "Rajveer Singh", "Class 7", "2024-11-06", AdmissionStatus::Pending, "+91 98100 11006", "rajveer.singh@gmail.com"),
    admission!("ADM-2024-007", "Kabir Mehta", "Harsh Mehta", "Class 3", "2024-11-07", AdmissionStatus::Rejected, "+91 98100 11007", "harsh.mehta@gmail.com"),
    admission!("ADM-2024-008", "Saanvi Joshi", "Prakash Joshi", "Class 2", "2024-11-08", AdmissionStatus::Pending, "+91 98100 11008", "prakash.joshi@gmail.com"),
    admission!("ADM-2024-009", "Advait Kulkarni", "Sandeep Kulkarni", "Class 9", "2024-11-09", AdmissionStatus::Approved, "+91 98100 11009", "sandeep.k@gmail.com"),
    admission!("ADM-2024-010", "Myra Nair", "Suresh Nair", "Class 6", "2024-11-10", AdmissionStatus::Pending, "+91 98100 11010", "suresh.nair@gmail.com"),
    admission!("ADM-2024-011", "Reyansh Verma", "Anil Verma", "Class 4", "2024-11-11", AdmissionStatus::Waitlisted, "+91 98100 11011", "anil.verma@gmail.com"),
    admission!("ADM-2024-012", "Aadhya Rao", "Krishna Rao", "Class 8", "2024-11-12", AdmissionStatus::Pending, "+91 98100 11012", "krishna.rao@gmail.com"),
    admission!("ADM-2024-013", "Vivaan Malhotra", "Rohit Malhotra", "Class 1", "2024-11-12", AdmissionStatus::Approved, "+91 98100 11013", "rohit.m@gmail.com"),
    admission!("ADM-2024-014", "Kiara Desai", "Jignesh Desai", "Class 5", "2024-11-13", AdmissionStatus::Pending, "+91 98100 11014", "jignesh.desai@gmail.com"),
    admission!("ADM-2024-015", "Shaurya Bhatt", "Mihir Bhatt", "Class 7", "2024-11-14", AdmissionStatus::Rejected, "+91 98100 11015", "mihir.bhatt@gmail.com"),
    admission!("ADM-2024-016", "Navya Menon", "Arun Menon", "Class 3", "2024-11-15", AdmissionStatus::Pending, "+91 98100 11016", "arun.menon@gmail.com"),
    admission!("ADM-2024-017", "Atharv Chauhan", "Devendra Chauhan", "Class 2", "2024-11-16", AdmissionStatus::Approved, "+91 98100 11017", "dev.chauhan@gmail.com"),
    admission!("ADM-2024-018", "Prisha Agarwal", "Manoj Agarwal", "Class 9", "2024-11-17", AdmissionStatus::Pending, "+91 98100 11018", "manoj.agarwal@gmail.com"),
    admission!("ADM-2024-019", "Ayaan Khan", "Imran Khan", "Class 6", "2024-11-18", AdmissionStatus::Waitlisted, "+91 98100 11019", "imran.khan@gmail.com"),
    admission!("ADM-2024-020", "Anika Choudhury", "Debashis Choudhury", "Class 4", "2024-11-19", AdmissionStatus::Pending, "+91 98100 11020", "deb.choudhury@gmail.com"),
    admission!("ADM-2024-021", "Rudra Pillai", "Mohan Pillai", "Class 8", "2024-11-20", AdmissionStatus::Approved, "+91 98100 11021", "mohan.pillai@gmail.com"),
    admission!("ADM-2024-022", "Sara Fernandes", "Clement Fernandes", "Class 1", "2024-11-21", AdmissionStatus::Pending, "+91 98100 11022", "clem.fernandes@gmail.com"),
    admission!("ADM-2024-023", "Dhruv Saxena", "Pankaj Saxena", "Class 5", "2024-11-22", AdmissionStatus::Pending, "+91 98100 11023", "pankaj.saxena@gmail.com"),
    admission!("ADM-2024-024", "Tara Banerjee", "Sourav Banerjee", "Class 7", "2024-11-22", AdmissionStatus::Approved, "+91 98100 11024", "sourav.b@gmail.com"),
];

pub fn admission_by_id(id: &str) -> Option<&'static Admission> {
    ADMISSIONS.iter().find(|a| a.id == id)
}

pub static STUDENTS: &[Student] = &[
    Student { id: "STU-001", name: "Aarav Sharma", roll_no: "8A-01", class: "Class 8", section: "A", parent_name: "Vikram Sharma", parent_phone: "+91 98100 11001" },
    Student { id: "STU-002", name: "Diya Patel", roll_no: "8A-02", class: "Class 8", section: "A", parent_name: "Nilesh Patel", parent_phone: "+91 98100 11002" },
    Student { id: "STU-003", name: "Arjun Reddy", roll_no: "8A-03", class: "Class 8", section: "A", parent_name: "Srinivas Reddy", parent_phone: "+91 98100 11003" },
    Student { id: "STU-004", name: "Ananya Iyer", roll_no: "8B-01", class: "Class 8", section: "B", parent_name: "Ramesh Iyer", parent_phone: "+91 98100 11004" },
    Student { id: "STU-005", name: "Vihaan Gupta", roll_no: "8B-02", class: "Class 8", section: "B", parent_name: "Amit Gupta", parent_phone: "+91 98100 11005" },
    Student { id: "STU-006", name: "Ishita Singh", roll_no: "9A-01", class: "Class 9", section: "A", parent_name: "Rajveer Singh", parent_phone: "+91 98100 11006" },
    Student { id: "STU-007", name: "Kabir Mehta", roll_no: "9A-02", class: "Class 9", section: "A", parent_name: "Harsh Mehta", parent_phone: "+91 98100 11007" },
    Student { id: "STU-008", name: "Saanvi Joshi", roll_no: "9A-03", class: "Class 9", section: "A", parent_name: "Prakash Joshi", parent_phone: "+91 98100 11008" },
    Student { id: "STU-009", name: "Advait Kulkarni", roll_no: "10A-01", class: "Class 10", section: "A", parent_name: "Sandeep Kulkarni", parent_phone: "+91 98100 11009" },
    Student { id: "STU-010", name: "Myra Nair", roll_no: "10A-02", class: "Class 10", section: "A", parent_name: "Suresh Nair", parent_phone: "+91 98100 11010" },
    Student { id: "STU-011", name: "Reyansh Verma", roll_no: "10B-01", class: "Class 10", section: "B", parent_name: "Anil Verma", parent_phone: "+91 98100 11011" },
    Student { id: "STU-012", name: "Aadhya Rao", roll_no: "10B-02", class: "Class 10", section: "B", parent_name: "Krishna Rao", parent_phone: "+91 98100 11012" },
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate { id: "CERT-101", student: "Advait Kulkarni", cert_type: "Transfer Certificate", requested: "2024-11-15", status: "Pending" },
    Certificate { id: "CERT-102", student: "Myra Nair", cert_type: "Bonafide Certificate", requested: "2024-11-16", status: "Issued" },
    Certificate { id: "CERT-103", student: "Ishita Singh", cert_type: "Character Certificate", requested: "2024-11-18", status: "Pending" },
    Certificate { id: "CERT-104", student: "Kabir Mehta", cert_type: "Bonafide Certificate", requested: "2024-11-19", status: "Issued" },
    Certificate { id: "CERT-105", student: "Diya Patel", cert_type: "Migration Certificate", requested: "2024-11-21", status: "Pending" },
];

pub static TEACHER_CLASSES: &[ClassGroup] = &[
    ClassGroup { id: "CG-01", name: "Class 8-A", subject: "Mathematics", students: 42 },
    ClassGroup { id: "CG-02", name: "Class 8-B", subject: "Mathematics", students: 40 },
    ClassGroup { id: "CG-03", name: "Class 9-A", subject: "Mathematics", students: 38 },
    ClassGroup { id: "CG-04", name: "Class 10-A", subject: "Mathematics", students: 36 },
];

pub static ATTENDANCE_ROSTER: &[RosterEntry] = &[
    RosterEntry { id: "STU-001", name: "Aarav Sharma", roll_no: "8A-01", status: AttendanceStatus::Present },
    RosterEntry { id: "STU-002", name: "Diya Patel", roll_no: "8A-02", status: AttendanceStatus::Present },
    RosterEntry { id: "STU-003", name: "Arjun Reddy", roll_no: "8A-03", status: AttendanceStatus::Absent },
    RosterEntry { id: "STU-004", name: "Ananya Iyer", roll_no: "8A-04", status: AttendanceStatus::Present },
    RosterEntry { id: "STU-005", name: "Vihaan Gupta", roll_no: "8A-05", status: AttendanceStatus::Late },
    RosterEntry { id: "STU-006", name: "Ishita Singh", roll_no: "8A-06", status: AttendanceStatus::Present },
    RosterEntry { id: "STU-007", name: "Kabir Mehta", roll_no: "8A-07", status: AttendanceStatus::Present },
    RosterEntry { id: "STU-008", name: "Saanvi Joshi", roll_no: "8A-08", status: AttendanceStatus::Absent },
];

pub static LESSON_PLANS: &[LessonPlan] = &[
    LessonPlan { id: "LP-01", title: "Quadratic Equations: Introduction", subject: "Mathematics", class: "Class 10-A", date: "2024-11-25", status: WorkStatus::Approved },
    LessonPlan { id: "LP-02", title: "Linear Equations in Two Variables", subject: "Mathematics", class: "Class 9-A", date: "2024-11-25", status: WorkStatus::Review },
    LessonPlan { id: "LP-03", title: "Mensuration: Surface Areas", subject: "Mathematics", class: "Class 8-A", date: "2024-11-26", status: WorkStatus::Draft },
    LessonPlan { id: "LP-04", title: "Probability Basics", subject: "Mathematics", class: "Class 8-B", date: "2024-11-27", status: WorkStatus::Draft },
    LessonPlan { id: "LP-05", title: "Trigonometric Ratios", subject: "Mathematics", class: "Class 10-A", date: "2024-11-28", status: WorkStatus::Completed },
];

pub static EXAM_SCHEDULES: &[ExamSchedule] = &[
    ExamSchedule { id: "EX-01", exam: "Half Yearly", subject: "Mathematics", class: "Class 8-A", date: "2024-12-02", max_marks: 80, status: WorkStatus::Approved },
    ExamSchedule { id: "EX-02", exam: "Half Yearly", subject: "Mathematics", class: "Class 9-A", date: "2024-12-03", max_marks: 80, status: WorkStatus::Approved },
    ExamSchedule { id: "EX-03", exam: "Half Yearly", subject: "Mathematics", class: "Class 10-A", date: "2024-12-04", max_marks: 80, status: WorkStatus::Review },
    ExamSchedule { id: "EX-04", exam: "Unit Test 3", subject: "Mathematics", class: "Class 8-B", date: "2024-12-10", max_marks: 25, status: WorkStatus::Draft },
];

pub static EXAM_RESULTS: &[ExamResult] = &[
    ExamResult { exam: "Half Yearly", subject: "Mathematics", max_marks: 80, obtained: 72, grade: "A" },
    ExamResult { exam: "Half Yearly", subject: "Science", max_marks: 80, obtained: 68, grade: "A" },
    ExamResult { exam: "Half Yearly", subject: "English", max_marks: 80, obtained: 74, grade: "A+" },
    ExamResult { exam: "Half Yearly", subject: "Hindi", max_marks: 80, obtained: 61, grade: "B+" },
    ExamResult { exam: "Half Yearly", subject: "Social Science", max_marks: 80, obtained: 65, grade: "A" },
];

pub static TIMETABLE: &[TimetableSlot] = &[
    TimetableSlot { period: 1, time: "08:00 - 08:45", subject: "Mathematics", teacher: "Mrs. Sunita Verma", room: "201" },
    TimetableSlot { period: 2, time: "08:45 - 09:30", subject: "Science", teacher: "Mr. Ajay Bhatia", room: "Lab 2" },
    TimetableSlot { period: 3, time: "09:45 - 10:30", subject: "English", teacher: "Ms. Priya Menon", room: "201" },
    TimetableSlot { period: 4, time: "10:30 - 11:15", subject: "Hindi", teacher: "Mrs. Kavita Joshi", room: "201" },
    TimetableSlot { period: 5, time: "11:30 - 12:15", subject: "Social Science", teacher: "Mr. Dinesh Rawat", room: "203" },
    TimetableSlot { period: 6, time: "12:15 - 13:00", subject: "Computer Science", teacher: "Mr. Sanjay Pawar", room: "Lab 1" },
    TimetableSlot { period: 7, time: "13:45 - 14:30", subject: "Physical Education", teacher: "Mr. Vinod Yadav", room: "Ground" },
];

pub static LEARNING_RESOURCES: &[LearningResource] = &[
    LearningResource { id: "LR-01", title: "Quadratic Equations Explained", subject: "Mathematics", kind: "Video", duration: "24 min", progress: 80 },
    LearningResource { id: "LR-02", title: "Chemical Reactions Worksheet", subject: "Science", kind: "Worksheet", duration: "30 min", progress: 100 },
    LearningResource { id: "LR-03", title: "Grammar: Active and Passive Voice", subject: "English", kind: "Notes", duration: "15 min", progress: 40 },
    LearningResource { id: "LR-04", title: "The Mughal Empire", subject: "Social Science", kind: "Video", duration: "32 min", progress: 0 },
    LearningResource { id: "LR-05", title: "Python Loops Practice Set", subject: "Computer Science", kind: "Worksheet", duration: "45 min", progress: 60 },
];

pub static PARENT_FEES: &[FeeRecord] = &[
    FeeRecord { id: "FEE-Q3-TUI", fee_head: "Tuition Fee (Q3)", amount: 25000, due_date: "2024-12-10", status: PayStatus::Pending },
    FeeRecord { id: "FEE-Q3-TRN", fee_head: "Transport Fee (Q3)", amount: 6000, due_date: "2024-12-10", status: PayStatus::Pending },
    FeeRecord { id: "FEE-Q2-TUI", fee_head: "Tuition Fee (Q2)", amount: 25000, due_date: "2024-09-10", status: PayStatus::Paid },
    FeeRecord { id: "FEE-ANN-LAB", fee_head: "Lab & Activity Fee", amount: 4500, due_date: "2024-08-15", status: PayStatus::Paid },
    FeeRecord { id: "FEE-ANN-LIB", fee_head: "Library Fee", amount: 1200, due_date: "2024-08-15", status: PayStatus::Overdue },
];

pub static TRANSACTIONS: &[Transaction] = &[
    Transaction { id: "TXN-9101", student: "Aarav Sharma", class: "Class 8-A", amount: 25000, method: "UPI", date: "2024-11-20", status: PayStatus::Completed },
    Transaction { id: "TXN-9102", student: "Diya Patel", class: "Class 8-A", amount: 31000, method: "Card", date: "2024-11-20", status: PayStatus::Completed },
    Transaction { id: "TXN-9103", student: "Arjun Reddy", class: "Class 8-A", amount: 12500, method: "Cash", date: "2024-11-20", status: PayStatus::Partial },
    Transaction { id: "TXN-9104", student: "Ananya Iyer", class: "Class 8-B", amount: 25000, method: "UPI", date: "2024-11-21", status: PayStatus::Completed },
    Transaction { id: "TXN-9105", student: "Vihaan Gupta", class: "Class 8-B", amount: 25000, method: "Net Banking", date: "2024-11-21", status: PayStatus::Pending },
    Transaction { id: "TXN-9106", student: "Ishita Singh", class: "Class 9-A", amount: 31000, method: "UPI", date: "2024-11-21", status: PayStatus::Completed },
    Transaction { id: "TXN-9107", student: "Kabir Mehta", class: "Class 9-A", amount: 6000, method: "Cash", date: "2024-11-22", status: PayStatus::Completed },
    Transaction { id: "TXN-9108", student: "Saanvi Joshi", class: "Class 9-A", amount: 25000, method: "Cheque", date: "2024-11-22", status: PayStatus::Pending },
    Transaction { id: "TXN-9109", student: "Advait Kulkarni", class: "Class 10-A", amount: 31000, method: "UPI", date: "2024-11-22", status: PayStatus::Completed },
    Transaction { id: "TXN-9110", student: "Myra Nair", class: "Class 10-A", amount: 25000, method: "Card", date: "2024-11-23", status: PayStatus::Completed },
    Transaction { id: "TXN-9111", student: "Reyansh Verma", class: "Class 10-B", amount: 12500, method: "UPI", date: "2024-11-23", status: PayStatus::Partial },
    Transaction { id: "TXN-9112", student: "Aadhya Rao", class: "Class 10-B", amount: 25000, method: "UPI", date: "2024-11-23", status: PayStatus::Completed },
];

pub static DEFAULTERS: &[Defaulter] = &[
    Defaulter { student: "Arjun Reddy", class: "Class 8-A", pending: 12500, due_date: "2024-10-10", overdue_days: 44 },
    Defaulter { student: "Reyansh Verma", class: "Class 10-B", pending: 12500, due_date: "2024-10-10", overdue_days: 44 },
    Defaulter { student: "Kabir Mehta", class: "Class 9-A", pending: 25000, due_date: "2024-11-10", overdue_days: 13 },
    Defaulter { student: "Sara Fernandes", class: "Class 1-B", pending: 8200, due_date: "2024-11-15", overdue_days: 8 },
];

pub static APPROVALS: &[Approval] = &[
    Approval { id: "APR-501", request: "Science lab equipment purchase", requested_by: "Mr. Ajay Bhatia", category: "Procurement", date: "2024-11-18", status: ApprovalStatus::Pending },
    Approval { id: "APR-502", request: "Class 10 Delhi excursion", requested_by: "Ms. Priya Menon", category: "Field Trip", date: "2024-11-19", status: ApprovalStatus::Pending },
    Approval { id: "APR-503", request: "Casual leave: 2 days", requested_by: "Mrs. Kavita Joshi", category: "Leave", date: "2024-11-19", status: ApprovalStatus::Approved },
    Approval { id: "APR-504", request: "Annual day budget revision", requested_by: "Admin Office", category: "Finance", date: "2024-11-20", status: ApprovalStatus::Pending },
    Approval { id: "APR-505", request: "New library subscriptions", requested_by: "Mrs. Meena Krishnan", category: "Procurement", date: "2024-11-21", status: ApprovalStatus::Rejected },
];

pub static REPORTS: &[Report] = &[
    Report { id: "RPT-01", name: "Monthly Attendance Summary", category: "Attendance", generated: "2024-11-01", status: WorkStatus::Completed },
    Report { id: "RPT-02", name: "Fee Collection: October", category: "Finance", generated: "2024-11-02", status: WorkStatus::Completed },
    Report { id: "RPT-03", name: "Half Yearly Performance Analysis", category: "Academics", generated: "2024-11-20", status: WorkStatus::Review },
    Report { id: "RPT-04", name: "Staff Utilization Report", category: "HR", generated: "2024-11-21", status: WorkStatus::Draft },
];

pub static ROOMS: &[RoomAllocation] = &[
    RoomAllocation { room: "A-101", block: "Block A", capacity: 4, occupied: 4, status: "Full" },
    RoomAllocation { room: "A-102", block: "Block A", capacity: 4, occupied: 3, status: "Available" },
    RoomAllocation { room: "A-103", block: "Block A", capacity: 4, occupied: 4, status: "Full" },
    RoomAllocation { room: "B-201", block: "Block B", capacity: 2, occupied: 1, status: "Available" },
    RoomAllocation { room: "B-202", block: "Block B", capacity: 2, occupied: 2, status: "Full" },
    RoomAllocation { room: "B-203", block: "Block B", capacity: 2, occupied: 0, status: "Maintenance" },
];

pub static ROUTES: &[TransportRoute] = &[
    TransportRoute { route: "Route 1: Dwarka", driver: "Ram Singh", vehicle: "DL 1PC 4521", students: 42, status: "On Time" },
    TransportRoute { route: "Route 2: Rohini", driver: "Shyam Lal", vehicle: "DL 1PC 4522", students: 38, status: "On Time" },
    TransportRoute { route: "Route 3: Noida", driver: "Mahesh Kumar", vehicle: "DL 1PC 4523", students: 45, status: "Delayed" },
    TransportRoute { route: "Route 4: Gurgaon", driver: "Sohan Pal", vehicle: "DL 1PC 4524", students: 31, status: "On Time" },
];

pub static BOOK_LOANS: &[BookLoan] = &[
    BookLoan { id: "LN-801", title: "Wings of Fire", student: "Aarav Sharma", issued: "2024-11-05", due: "2024-11-19", status: "Overdue" },
    BookLoan { id: "LN-802", title: "Malgudi Days", student: "Diya Patel", issued: "2024-11-10", due: "2024-11-24", status: "Issued" },
    BookLoan { id: "LN-803", title: "A Brief History of Time", student: "Advait Kulkarni", issued: "2024-11-12", due: "2024-11-26", status: "Issued" },
    BookLoan { id: "LN-804", title: "The Jungle Book", student: "Ananya Iyer", issued: "2024-11-01", due: "2024-11-15", status: "Returned" },
    BookLoan { id: "LN-805", title: "NCERT Mathematics X", student: "Myra Nair", issued: "2024-11-14", due: "2024-11-28", status: "Issued" },
];

pub static MESSAGES: &[Message] = &[
    Message { id: "MSG-01", from: "Class Teacher (8-A)", subject: "Parent-Teacher Meeting", preview: "PTM is scheduled for Saturday, 30 November at 10:00 AM...", date: "2024-11-21", read: false },
    Message { id: "MSG-02", from: "Accounts Office", subject: "Q3 Fee Reminder", preview: "This is a gentle reminder that the third quarter fees are due...", date: "2024-11-20", read: false },
    Message { id: "MSG-03", from: "Principal's Office", subject: "Winter Break Schedule", preview: "The school will remain closed from 25 December to 5 January...", date: "2024-11-18", read: true },
    Message { id: "MSG-04", from: "Sports Department", subject: "Annual Sports Day", preview: "Selections for track events begin next week during PE periods...", date: "2024-11-15", read: true },
];

pub static INSIGHTS: &[AiInsight] = &[
    AiInsight { id: "AI-01", title: "Attendance dip in Class 8-B", description: "Attendance fell 6% this week against the monthly average. Wednesday absences cluster around the Noida transport route.", priority: InsightPriority::High, actionable: true },
    AiInsight { id: "AI-02", title: "Fee collection ahead of target", description: "November collections are at 82% of billed amount, 9 points ahead of the same period last year.", priority: InsightPriority::Low, actionable: false },
    AiInsight { id: "AI-03", title: "Exam schedule conflict", description: "Class 10-A has two assessments scheduled within 24 hours in the first week of December.", priority: InsightPriority::Medium, actionable: true },
];

pub static CHAT_SEED: &[ChatMessage] = &[
    ChatMessage { from_user: false, content: "Hello! I can help you with attendance trends, fee summaries, timetable conflicts, and more. What would you like to know?" },
    ChatMessage { from_user: true, content: "Which classes had the lowest attendance this week?" },
    ChatMessage { from_user: false, content: "Class 8-B (87%) and Class 6-A (89%) had the lowest attendance this week. Class 8-B absences cluster on Wednesday, which correlates with the delayed Noida transport route." },
];

pub static CAPABILITIES: &[Capability] = &[
    Capability { name: "Attendance analysis", description: "Spot patterns and flag classes drifting below target" },
    Capability { name: "Fee intelligence", description: "Collection summaries, defaulter lists, and projections" },
    Capability { name: "Timetable checks", description: "Find clashes across classes, teachers, and rooms" },
    Capability { name: "Report drafting", description: "Draft circulars and summaries from school data" },
];
