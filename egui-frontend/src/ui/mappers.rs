//! Conversion from domain models to the DTOs the UI renders.

use library_tracker_backend::domain::models as domain;

pub fn book_to_dto(book: domain::Book) -> shared::Book {
    shared::Book {
        id: book.id,
        title: book.title,
        author: book.author,
        isbn: book.isbn,
        total_copies: book.total_copies,
        available_copies: book.available_copies,
    }
}

pub fn member_to_dto(member: domain::Member) -> shared::Member {
    shared::Member {
        id: member.id,
        name: member.name,
        email: member.email,
        role: role_to_dto(member.role),
        borrowed_books: member.borrowed_books,
    }
}

pub fn role_to_dto(role: domain::MemberRole) -> shared::MemberRole {
    match role {
        domain::MemberRole::Student => shared::MemberRole::Student,
        domain::MemberRole::Faculty => shared::MemberRole::Faculty,
    }
}

pub fn role_from_dto(role: shared::MemberRole) -> domain::MemberRole {
    match role {
        shared::MemberRole::Student => domain::MemberRole::Student,
        shared::MemberRole::Faculty => domain::MemberRole::Faculty,
    }
}

pub fn transaction_to_dto(tx: domain::Transaction) -> shared::Transaction {
    shared::Transaction {
        id: tx.id,
        member_id: tx.member_id,
        book_id: tx.book_id,
        borrow_date: tx.borrow_date.to_rfc3339(),
        due_date: tx.due_date.to_rfc3339(),
        return_date: tx.return_date.map(|d| d.to_rfc3339()),
        fine: tx.fine,
        status: match tx.status {
            domain::TransactionStatus::Borrowed => shared::TransactionStatus::Borrowed,
            domain::TransactionStatus::Returned => shared::TransactionStatus::Returned,
        },
    }
}
