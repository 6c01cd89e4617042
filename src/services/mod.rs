pub mod mentees;
